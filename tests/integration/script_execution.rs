use tempfile::TempDir;
use vfs_shell::config::ShellConfig;
use vfs_shell::document::default_tree;
use vfs_shell::shell::{ScriptOutcome, Shell};
use vfs_shell::tooling::cli::{CliContext, Commands};

fn run_script(contents: &str) -> (ScriptOutcome, String, Shell) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("startup_script.txt");
    std::fs::write(&path, contents).unwrap();

    let mut shell = Shell::new(default_tree());
    let mut out = Vec::new();
    let outcome = shell.run_script(&path, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap(), shell)
}

#[test]
fn script_echoes_each_executed_line() {
    let (outcome, out, _) = run_script(
        "# startup\n\
         ls\n\
         \n\
         cp readme.txt docs/readme_copy.txt\n\
         ls docs\n\
         bogus arg\n",
    );
    assert_eq!(outcome, ScriptOutcome::Completed);
    assert_eq!(
        out,
        "VFS> ls\n\
         readme.txt bin docs\n\
         VFS> cp readme.txt docs/readme_copy.txt\n\
         cp: 'readme.txt' -> 'docs/readme_copy.txt'\n\
         VFS> ls docs\n\
         doc.txt readme_copy.txt\n\
         VFS> bogus arg\n\
         Error: unknown command 'bogus'\n"
    );
}

#[test]
fn script_exit_keeps_mutations_made_before_it() {
    let (outcome, _, shell) = run_script("cp readme.txt copy.txt\nexit\ncp readme.txt later.txt\n");
    assert_eq!(outcome, ScriptOutcome::Exited);
    assert!(shell.vfs().resolve("copy.txt").is_some());
    assert!(shell.vfs().resolve("later.txt").is_none());
}

#[test]
fn script_subcommand_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = ShellConfig {
        document: temp_dir.path().join("vfs.json"),
        startup_script: None,
        history: false,
        ..ShellConfig::default()
    };
    let mut context = CliContext::new(config).unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let mut out = Vec::new();
    context
        .execute(&Commands::Script { path: missing.clone() }, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Error: script file '{}' does not exist.\n", missing.display())
    );
    assert!(temp_dir.path().join("vfs.json").exists());
}
