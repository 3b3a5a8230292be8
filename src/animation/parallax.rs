use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Maximum travel in px of the front and back orbs. The back orb moves the
/// other way.
pub const FRONT_ORB_TRAVEL: f64 = 50.0;
pub const BACK_ORB_TRAVEL: f64 = -30.0;

/// Offset of an orb for a pointer position, zero at the viewport centre.
pub fn parallax_offset(client: (f64, f64), viewport: (f64, f64), travel: f64) -> (f64, f64) {
    let (width, height) = viewport;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client.0 / width - 0.5) * travel,
        (client.1 / height - 0.5) * travel,
    )
}

fn viewport() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn move_orb(node: &NodeRef, (x, y): (f64, f64)) {
    if let Some(orb) = node.cast::<HtmlElement>() {
        let _ = orb
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", x, y));
    }
}

/// Drifts the two background orbs with the pointer. Styles are written
/// directly so pointer movement never re-renders the page.
#[hook]
pub fn use_parallax(front: NodeRef, back: NodeRef) {
    use_event_with_window("mousemove", move |e: MouseEvent| {
        let Some(viewport) = viewport() else {
            return;
        };
        let client = (e.client_x() as f64, e.client_y() as f64);
        move_orb(&front, parallax_offset(client, viewport, FRONT_ORB_TRAVEL));
        move_orb(&back, parallax_offset(client, viewport, BACK_ORB_TRAVEL));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_viewport_is_at_rest() {
        assert_eq!(parallax_offset((500.0, 400.0), (1000.0, 800.0), FRONT_ORB_TRAVEL), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_the_travel() {
        assert_eq!(parallax_offset((0.0, 0.0), (1000.0, 800.0), FRONT_ORB_TRAVEL), (-25.0, -25.0));
        assert_eq!(parallax_offset((1000.0, 800.0), (1000.0, 800.0), FRONT_ORB_TRAVEL), (25.0, 25.0));
    }

    #[test]
    fn back_orb_moves_against_the_pointer() {
        assert_eq!(parallax_offset((1000.0, 0.0), (1000.0, 800.0), BACK_ORB_TRAVEL), (-15.0, 15.0));
    }

    #[test]
    fn empty_viewport_does_not_move() {
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), FRONT_ORB_TRAVEL), (0.0, 0.0));
    }
}
