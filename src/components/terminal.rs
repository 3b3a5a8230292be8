use yew::prelude::*;

use crate::content::TERMINAL_LINES;

/// Pause between consecutive terminal lines.
const LINE_STAGGER_MS: u32 = 300;

fn line_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * LINE_STAGGER_MS)
}

#[function_component(Terminal)]
pub fn terminal() -> Html {
    html! {
        <div class="terminal" aria-hidden="true">
            <div class="terminal-bar">
                <span></span>
                <span></span>
                <span></span>
            </div>
            <div class="terminal-body">
                { for TERMINAL_LINES.iter().enumerate().map(|(index, line)| html! {
                    <div class="terminal-line" style={line_delay(index)}>{*line}</div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::line_delay;

    #[test]
    fn lines_are_staggered() {
        assert_eq!(line_delay(0), "animation-delay: 0ms;");
        assert_eq!(line_delay(3), "animation-delay: 900ms;");
    }
}
