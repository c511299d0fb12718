use crate::packages::{BatchResult, PackageOutcome};
use crate::report;

/// One line per package: the summary, or why the package was rejected
pub fn render(batch: &BatchResult) -> String {
    let mut out = String::new();

    for result in &batch.results {
        match &result.outcome {
            PackageOutcome::Processed(r) => out.push_str(&report::format(r)),
            PackageOutcome::Failed { message } => {
                out.push_str("incorrect package: ");
                out.push_str(message);
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::{process_packages, Package};

    #[test]
    fn test_render_mixed_batch() {
        let batch = process_packages(
            &[
                Package::new("RUN", vec![15000.0, 1.0, 75.0]),
                Package::new("XYZ", vec![]),
            ],
            false,
        );

        let text = render(&batch);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
        assert_eq!(lines[1], "incorrect package: unknown workout code: XYZ");
    }
}
