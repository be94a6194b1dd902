use crate::domain::model::{CheckReport, OutputFormat};
use crate::utils::error::Result;

/// Text is one `<input>: <bool>` line per verdict. JSON is the whole report.
pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .verdicts
            .iter()
            .map(|v| format!("{}: {}", v.input, v.is_isogram))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::isogram::IsogramChecker;

    fn sample() -> CheckReport {
        let checker = IsogramChecker::default();
        CheckReport::from_verdicts(vec![checker.check("Dermatoglyphics"), checker.check("moOse")])
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(text, "Dermatoglyphics: true\nmoOse: false");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["non_isograms"], 1);
        assert_eq!(value["verdicts"][1]["repeated"], "o");
        assert_eq!(value["verdicts"][1]["position"], 2);
    }
}
