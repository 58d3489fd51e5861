use vfs_shell::document::default_tree;
use vfs_shell::shell::Shell;

use crate::integration::support::run;

#[test]
fn not_found_messages_leave_tree_unmodified() {
    let mut shell = Shell::new(default_tree());
    let before = shell.vfs().clone();

    let cases = [
        ("ls ghost", "ls: cannot access 'ghost': No such file or directory"),
        ("cd ghost", "cd: no such directory: ghost"),
        (
            "tree docs/ghost",
            "tree: cannot access 'docs/ghost': No such file or directory",
        ),
        (
            "cp ghost docs/x",
            "cp: cannot stat 'ghost': No such file or directory",
        ),
        (
            "cp readme.txt ghost/x",
            "cp: cannot stat 'ghost/x': No such file or directory",
        ),
        ("cp readme.txt", "cp: missing destination file operand after 'readme.txt'"),
    ];
    for (line, expected) in cases {
        assert_eq!(run(&mut shell, line), expected, "line {line:?}");
    }
    assert_eq!(shell.vfs(), &before);
}

#[test]
fn tree_renders_reference_document() {
    let mut shell = Shell::new(default_tree());
    let expected = [
        "├── readme.txt",
        "├── bin",
        "│   └── test.bin",
        "└── docs",
        "    └── doc.txt",
    ]
    .join("\n");
    assert_eq!(run(&mut shell, "tree"), expected);
    assert_eq!(run(&mut shell, "tree docs"), "└── doc.txt");
}

#[test]
fn copy_of_directory_is_independent() {
    let mut shell = Shell::new(default_tree());
    run(&mut shell, "cp docs archive");
    run(&mut shell, "cp readme.txt archive/readme.txt");

    assert_eq!(run(&mut shell, "ls archive"), "doc.txt readme.txt");
    assert_eq!(run(&mut shell, "ls docs"), "doc.txt");
    assert_eq!(run(&mut shell, "ls"), "readme.txt bin docs archive");
}

#[test]
fn copy_into_own_subtree_terminates() {
    let mut shell = Shell::new(default_tree());
    assert_eq!(run(&mut shell, "cp docs docs/nested"), "cp: 'docs' -> 'docs/nested'");
    assert_eq!(run(&mut shell, "ls docs/nested"), "doc.txt");
    assert_eq!(
        run(&mut shell, "tree docs"),
        ["├── doc.txt", "└── nested", "    └── doc.txt"].join("\n")
    );
}

#[test]
fn stub_commands_ignore_tree() {
    let mut shell = Shell::new(default_tree());
    let before = shell.vfs().clone();
    assert_eq!(run(&mut shell, "uptime"), "up 0 days, 0:00:00");
    assert!(!run(&mut shell, "date").is_empty());
    assert_eq!(shell.vfs(), &before);
}
