use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub fn location_prompt(app_name: &str) -> String {
    format!("Permitir que \"{}\" use a sua localização?", app_name)
}

/// `s`, `sim`, `y` and `yes` grant, case-insensitively. Anything else denies.
pub fn is_granted(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

/// Writes the prompt to `output` and reads one line of `input`. End of input
/// counts as a denial.
pub fn ask_location_permission<R: BufRead, W: Write>(
    app_name: &str,
    mut input: R,
    mut output: W,
) -> Result<bool> {
    write!(output, "{} [s/N] ", location_prompt(app_name))?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let granted = is_granted(&answer);
    tracing::info!("Location permission {}", if granted { "granted" } else { "denied" });
    Ok(granted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            location_prompt("PlantãoFarma"),
            "Permitir que \"PlantãoFarma\" use a sua localização?"
        );
    }

    #[test]
    fn test_answers() {
        for yes in ["s", "Sim", " y\n", "YES"] {
            assert!(is_granted(yes), "{:?}", yes);
        }
        for no in ["", "n", "não", "maybe"] {
            assert!(!is_granted(no), "{:?}", no);
        }
    }

    #[test]
    fn test_ask_reads_one_line() {
        let mut output = Vec::new();
        let granted =
            ask_location_permission("PlantãoFarma", Cursor::new("sim\nn\n"), &mut output).unwrap();

        assert!(granted);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Permitir que \"PlantãoFarma\""));
    }

    #[test]
    fn test_ask_eof_denies() {
        let granted = ask_location_permission("X", Cursor::new(""), Vec::new()).unwrap();
        assert!(!granted);
    }
}
