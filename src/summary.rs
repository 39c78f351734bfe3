use crate::types::ProjectName;
use std::io::Write;

/// Lines printed after a successful generation, in order.
pub fn completion_summary(project_name: &ProjectName) -> Vec<String> {
    vec![
        format!("Flask project '{project_name}' has been initialized successfully."),
        String::new(),
        "\nTo run the project, follow these steps:".to_string(),
        format!("1. Navigate to the project directory: cd {project_name}"),
        "2. Create a virtual environment: python -m venv venv".to_string(),
        "3. Activate the virtual environment:".to_string(),
        "   On Windows: venv\\Scripts\\activate".to_string(),
        "   On Mac/Linux: source venv/bin/activate".to_string(),
        "4. Install dependencies: pip install -r requirements.txt".to_string(),
        "5. Run migrations to set up the database:".to_string(),
        "   a. Initialize migrations: python manage.py db init".to_string(),
        "   b. Generate migration scripts: python manage.py db migrate -m 'Initial migration'"
            .to_string(),
        "   c. Apply migrations: python manage.py db upgrade".to_string(),
        "6. Run the application: python manage.py run".to_string(),
    ]
}

/// Writes the completion summary, one line each.
pub fn write_summary<W: Write>(mut writer: W, project_name: &ProjectName) -> std::io::Result<()> {
    for line in completion_summary(project_name) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_project_and_all_steps() {
        let name = ProjectName::parse("blogapi").unwrap();
        let lines = completion_summary(&name);
        assert_eq!(lines[0], "Flask project 'blogapi' has been initialized successfully.");
        assert_eq!(lines[3], "1. Navigate to the project directory: cd blogapi");
        for step in 1..=6 {
            assert!(
                lines.iter().any(|l| l.starts_with(&format!("{step}. "))),
                "missing step {step}"
            );
        }
        assert_eq!(lines.last().unwrap(), "6. Run the application: python manage.py run");
    }

    #[test]
    fn writes_one_line_per_entry() {
        let name = ProjectName::parse("demo").unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &name).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Flask project 'demo' has been initialized successfully.\n\n\n"));
        assert!(text.contains("   On Windows: venv\\Scripts\\activate\n"));
        assert!(text.ends_with("python manage.py run\n"));
    }
}
