//! Download confirmation before any network or disk activity.

use crate::console::{Confirmation, Console};
use crate::error::RunError;
use crate::pipeline::DownloadPlan;
use std::io::{BufRead, Write};

/// Prints the run summary and asks the user to continue.
///
/// Returns immediately without output when the plan bypasses prompts.
pub fn confirm_download<R: BufRead, W: Write>(
    plan: &DownloadPlan,
    console: &mut Console<R, W>,
    attempts: u32,
) -> Result<(), RunError> {
    if plan.assume_yes {
        return Ok(());
    }

    let count = plan.urls.len();
    console.say(&format!("Source file:  {}", plan.source_name))?;
    console.say(&format!("Images found: {}", count))?;
    console.say(&format!("File names:   {}", plan.naming.pattern(count)))?;
    console.say(&format!("Destination:  {}", plan.dest_dir.display()))?;

    match console.confirm("Download these images?", attempts)? {
        Confirmation::Confirmed => Ok(()),
        Confirmation::Declined => {
            tracing::info!("download declined by user");
            Err(RunError::ConfirmationDenied)
        }
        Confirmation::Exhausted => Err(RunError::PromptExhausted {
            attempts: attempts.max(1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::OutputNaming;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn plan(count: usize, assume_yes: bool) -> DownloadPlan {
        DownloadPlan {
            source_name: "latus (sherlock).md".to_string(),
            urls: (1..=count)
                .map(|i| format!("https://firebasestorage.googleapis.com/{}.png", i))
                .collect(),
            naming: OutputNaming::new("pic", "-", "png"),
            dest_dir: PathBuf::from("/tmp/out"),
            assume_yes,
        }
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn bypass_prints_nothing() {
        let mut c = console("");
        confirm_download(&plan(2, true), &mut c, 3).unwrap();
        assert!(c.into_parts().1.is_empty());
    }

    #[test]
    fn summary_then_confirm() {
        let mut c = console("yes\n");
        confirm_download(&plan(2, false), &mut c, 3).unwrap();
        let out = String::from_utf8(c.into_parts().1).unwrap();
        assert!(out.contains("latus (sherlock).md"));
        assert!(out.contains("Images found: 2"));
        assert!(out.contains("pic-1.png .. pic-2.png"));
        assert!(out.contains("/tmp/out"));
        assert!(out.contains("Download these images?"));
    }

    #[test]
    fn zero_images_still_prompts() {
        let mut c = console("y\n");
        confirm_download(&plan(0, false), &mut c, 3).unwrap();
        let out = String::from_utf8(c.into_parts().1).unwrap();
        assert!(out.contains("Images found: 0"));
        assert!(out.contains("Download these images?"));
    }

    #[test]
    fn declined() {
        let mut c = console("no\n");
        assert!(matches!(
            confirm_download(&plan(1, false), &mut c, 3),
            Err(RunError::ConfirmationDenied)
        ));
    }

    #[test]
    fn exhausted() {
        let mut c = console("maybe\nperhaps\nYES\n");
        assert!(matches!(
            confirm_download(&plan(1, false), &mut c, 3),
            Err(RunError::PromptExhausted { attempts: 3 })
        ));
    }
}
