use proptest::prelude::*;
use vfs_shell::commands::listing::ls;
use vfs_shell::tree::{DirectoryNode, FileNode, Node, NodeRef, Vfs};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}(\\.txt)?"
}

proptest! {
    #[test]
    fn ls_lists_names_in_insertion_order(names in prop::collection::vec(name_strategy(), 0..12)) {
        let mut root = DirectoryNode::new();
        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            root.insert(name.clone(), FileNode::text(name.clone()).into());
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }
        let vfs = Vfs::from_root(root);
        prop_assert_eq!(ls(&vfs, &[]).unwrap(), expected.join(" "));
    }

    #[test]
    fn noop_segments_do_not_change_resolution(
        noise in prop::collection::vec(prop_oneof![Just(""), Just(".")], 0..4),
    ) {
        let mut inner = DirectoryNode::new();
        inner.insert("leaf", FileNode::text("x").into());
        let mut root = DirectoryNode::new();
        root.insert("dir", inner.into());
        let vfs = Vfs::from_root(root);

        let filler = noise.join("/");
        let path = format!("{filler}/dir/{filler}/leaf/{filler}");
        prop_assert_eq!(vfs.resolve(&path), vfs.resolve("dir/leaf"));
    }

    #[test]
    fn copies_are_independent(extra in name_strategy()) {
        let mut shell_root = DirectoryNode::new();
        let mut docs = DirectoryNode::new();
        docs.insert("doc.txt", FileNode::text("d").into());
        shell_root.insert("docs", docs.into());
        let mut vfs = Vfs::from_root(shell_root);

        vfs_shell::commands::execute(&mut vfs, "cp", &["docs".to_string(), "copy".to_string()]).unwrap();
        let original = vfs.resolve("docs").map(NodeRef::to_node);

        if let Some(Node::Directory(copy)) = vfs.resolve_mut("copy") {
            copy.insert(extra, FileNode::text("e").into());
        }
        prop_assert_eq!(vfs.resolve("docs").map(NodeRef::to_node), original);
    }
}
