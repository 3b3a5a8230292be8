use once_cell::sync::Lazy;
use regex::Regex;

pub const COUNTER_DURATION_MS: f64 = 2_000.0;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("valid counter pattern"));

/// Target of a counter, parsed once from the element's initial text.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub end: f64,
    pub is_decimal: bool,
    pub suffix: String,
}

impl CounterSpec {
    /// `None` when the text does not start with a number.
    pub fn parse(text: &str) -> Option<CounterSpec> {
        let number = LEADING_NUMBER.find(text.trim())?.as_str();
        let end = number.parse::<f64>().ok()?;
        let suffix: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();

        Some(CounterSpec {
            end,
            is_decimal: number.contains('.'),
            suffix: suffix.trim().to_string(),
        })
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        self.end * ease_out_quart(progress)
    }

    pub fn format(&self, value: f64) -> String {
        if self.is_decimal {
            format!("{:.2}{}", value, self.suffix)
        } else {
            format!("{}{}", value.floor() as i64, self.suffix)
        }
    }
}

/// Quartic ease-out over `[0, 1]`.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Wall-clock driven run of a single counter from zero to its target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        Self::with_duration(spec, COUNTER_DURATION_MS)
    }

    pub fn with_duration(spec: CounterSpec, duration_ms: f64) -> Self {
        CounterAnimation {
            spec,
            duration_ms,
            started_at: None,
        }
    }

    /// `now_ms` is the frame timestamp; the first call latches the start.
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        };

        CounterFrame {
            text: self.spec.format(self.spec.value_at(progress)),
            finished: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percentage() {
        let spec = CounterSpec::parse("87%").unwrap();
        assert_eq!(spec.end, 87.0);
        assert!(!spec.is_decimal);
        assert_eq!(spec.suffix, "%");
    }

    #[test]
    fn parses_decimal_without_suffix() {
        let spec = CounterSpec::parse("99.99").unwrap();
        assert_eq!(spec.end, 99.99);
        assert!(spec.is_decimal);
        assert_eq!(spec.suffix, "");
    }

    #[test]
    fn suffix_is_trimmed() {
        let spec = CounterSpec::parse("250 +").unwrap();
        assert_eq!(spec.end, 250.0);
        assert_eq!(spec.suffix, "+");
    }

    #[test]
    fn text_without_leading_number_is_skipped() {
        assert_eq!(CounterSpec::parse("Global"), None);
        assert_eq!(CounterSpec::parse(""), None);
        assert_eq!(CounterSpec::parse("$40"), None);
    }

    #[test]
    fn only_one_decimal_point_is_taken() {
        let spec = CounterSpec::parse("1.5.2x").unwrap();
        assert_eq!(spec.end, 1.5);
        assert!(spec.is_decimal);
        assert_eq!(spec.suffix, "x");
    }

    #[test]
    fn trailing_point_still_counts_as_decimal() {
        let spec = CounterSpec::parse("87.").unwrap();
        assert_eq!(spec.end, 87.0);
        assert!(spec.is_decimal);
        assert_eq!(spec.suffix, "");

        let mut anim = CounterAnimation::new(spec);
        anim.frame(0.0);
        assert_eq!(anim.frame(2_000.0).text, "87.00");
    }

    #[test]
    fn leading_point_is_a_decimal() {
        let spec = CounterSpec::parse(".5x").unwrap();
        assert_eq!(spec.end, 0.5);
        assert!(spec.is_decimal);
        assert_eq!(spec.suffix, "x");
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(3.0), 1.0);
    }

    #[test]
    fn easing_never_decreases() {
        let spec = CounterSpec::parse("500").unwrap();
        let mut last = spec.value_at(0.0);
        for step in 1..=200 {
            let value = spec.value_at(step as f64 / 200.0);
            assert!(value >= last, "dropped at step {}", step);
            last = value;
        }
    }

    #[test]
    fn finishes_on_exact_target_text() {
        let mut anim = CounterAnimation::new(CounterSpec::parse("87%").unwrap());
        let first = anim.frame(1_000.0);
        assert_eq!(first.text, "0%");
        assert!(!first.finished);

        let last = anim.frame(3_000.0);
        assert!(last.finished);
        assert_eq!(last.text, "87%");
    }

    #[test]
    fn decimal_counter_renders_two_places() {
        let mut anim = CounterAnimation::new(CounterSpec::parse("99.99").unwrap());
        assert_eq!(anim.frame(0.0).text, "0.00");
        assert_eq!(anim.frame(2_500.0).text, "99.99");
    }

    #[test]
    fn slow_frames_still_complete() {
        let mut anim = CounterAnimation::new(CounterSpec::parse("12+").unwrap());
        anim.frame(10.0);
        // A single late frame, e.g. after the tab was hidden.
        let frame = anim.frame(60_000.0);
        assert!(frame.finished);
        assert_eq!(frame.text, "12+");
    }

    #[test]
    fn midway_is_past_linear() {
        let spec = CounterSpec::parse("100").unwrap();
        let mut anim = CounterAnimation::new(spec);
        anim.frame(0.0);
        let frame = anim.frame(1_000.0);
        // 100 * (1 - 0.5^4) = 93.75
        assert_eq!(frame.text, "93");
    }
}
