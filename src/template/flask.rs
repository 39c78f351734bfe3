//! The built-in Flask REST API project.
//!
//! Bodies are kept byte-for-byte as the project has always emitted them, defects
//! included: `requirements.txt` lists `pywin32` (Windows only) and `fcntl` (part of
//! the Python standard library, not installable), and has no trailing newline.

use super::set::{FileTemplate, TemplateSet};

const APP_INIT: &str = include_str!("../../templates/flask/app/__init__.py.j2");
const APP_AUTH: &str = include_str!("../../templates/flask/app/auth.py.j2");
const APP_MODELS: &str = include_str!("../../templates/flask/app/models.py.j2");
const APP_EXTS: &str = include_str!("../../templates/flask/app/exts.py.j2");
const CONFIG: &str = include_str!("../../templates/flask/config.py.j2");
const MANAGE: &str = include_str!("../../templates/flask/manage.py.j2");
const RUN: &str = include_str!("../../templates/flask/run.py.j2");
const WSGI: &str = include_str!("../../templates/flask/wsgi.py.j2");
const REQUIREMENTS: &str = include_str!("../../templates/flask/requirements.txt.j2");
const DOT_ENV: &str = include_str!("../../templates/flask/dot-env.j2");
const DOT_GITIGNORE: &str = include_str!("../../templates/flask/dot-gitignore.j2");
// Contains JSX `{{ ... }}` blocks, so it is never rendered.
const README: &str = include_str!("../../templates/flask/readMe.md.j2");

impl TemplateSet {
    /// Flask application with JWT auth routes, a SQLAlchemy user model and migrations.
    pub fn flask() -> Self {
        let folders = vec!["{{ project_name }}/app".to_string()];
        let files = vec![
            FileTemplate::new("{{ project_name }}/app/__init__.py", APP_INIT),
            FileTemplate::new("{{ project_name }}/app/auth.py", APP_AUTH),
            FileTemplate::new("{{ project_name }}/app/models.py", APP_MODELS),
            FileTemplate::new("{{ project_name }}/app/exts.py", APP_EXTS),
            FileTemplate::new("{{ project_name }}/config.py", CONFIG),
            FileTemplate::new("{{ project_name }}/manage.py", MANAGE),
            FileTemplate::new("{{ project_name }}/run.py", RUN),
            FileTemplate::new("{{ project_name }}/wsgi.py", WSGI),
            FileTemplate::new("{{ project_name }}/requirements.txt", REQUIREMENTS),
            FileTemplate::new("{{ project_name }}/.env", DOT_ENV),
            FileTemplate::new("{{ project_name }}/.gitignore", DOT_GITIGNORE),
            FileTemplate::raw("{{ project_name }}/readMe.md", README),
        ];
        Self { folders, files }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_twelve_unique_files() {
        let set = TemplateSet::flask();
        assert_eq!(set.files.len(), 12);
        assert!(set.validate().is_ok());
        assert_eq!(set.folders, vec!["{{ project_name }}/app".to_string()]);
    }

    #[test]
    fn requirements_keep_known_defects() {
        let lines: Vec<_> = REQUIREMENTS.lines().collect();
        assert!(lines.contains(&"pywin32"));
        assert!(lines.contains(&"fcntl"));
        assert_eq!(lines.first(), Some(&"Flask"));
        assert_eq!(lines.last(), Some(&"werkzeug"));
        assert!(!REQUIREMENTS.ends_with('\n'));
    }

    #[test]
    fn env_file_is_fixed() {
        assert_eq!(
            DOT_ENV,
            "SECRET_KEY=586dfe9c5a2bfe48ae0781fe\nSQLALCHEMY_TRACK_MODIFICATIONS=False\n"
        );
    }

    #[test]
    fn only_readme_is_raw() {
        let raw: Vec<_> =
            TemplateSet::flask().files.into_iter().filter(|f| f.raw).map(|f| f.path).collect();
        assert_eq!(raw, vec!["{{ project_name }}/readMe.md".to_string()]);
        assert!(README.contains("value={{ isAuthenticated, login, signup, logout }}"));
    }

    #[test]
    fn app_factory_wires_extensions() {
        assert!(APP_INIT.contains("def create_app(config):"));
        assert!(APP_INIT.contains("api.add_namespace(auth_ns)"));
        assert!(APP_AUTH.contains("@auth_ns.route('/signup')"));
        assert!(APP_AUTH.contains("@auth_ns.route('/signin')"));
        assert!(APP_MODELS.contains("class User(db.Model):"));
        assert!(MANAGE.contains("create_app('config.DevConfig')"));
        assert_eq!(RUN, WSGI);
    }
}
