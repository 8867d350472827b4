use super::*;

#[test]
fn tokenize_simple() {
	assert_eq!(tokenize("install neorg"), vec!["install", "neorg"]);
}

#[test]
fn tokenize_irregular_whitespace() {
	assert_eq!(tokenize("  install\t neorg \n"), vec!["install", "neorg"]);
}

#[test]
fn tokenize_escaped_space() {
	assert_eq!(tokenize(r"open foo\ bar.txt"), vec!["open", "foo bar.txt"]);
}

#[test]
fn tokenize_keeps_other_backslashes() {
	assert_eq!(tokenize(r"a\b c\"), vec![r"a\b", r"c\"]);
}

#[test]
fn tokenize_empty() {
	assert!(tokenize("").is_empty());
	assert!(tokenize("   ").is_empty());
}

#[test]
fn opts_builder_derives_count() {
	let opts = CommandOpts::new("Rocks", vec!["sync".into()]).with_range(LineRange::One("7".into()));
	assert_eq!(opts.count, Some(7));
	assert_eq!(opts.args, "sync");

	let opts = opts.with_range(LineRange::One(".".into()));
	assert_eq!(opts.count, None);
}

#[test]
fn parse_cmdline_builds_opts() {
	let opts = parse_cmdline("Rocks", "'<,'>Rocks! install neorg").unwrap();
	assert_eq!(opts.name, "Rocks");
	assert!(opts.bang);
	assert_eq!(opts.range, Some(LineRange::Two("'<".into(), "'>".into())));
	assert_eq!(opts.fargs, vec!["install", "neorg"]);
	assert!(matches!(parse_cmdline("Rocks", "Lazy sync"), Err(CmdlineError::NameMismatch { .. })));
}

#[test]
fn opts_builder_sets_register() {
	let opts = CommandOpts::new("Rocks", vec!["log".into()]).with_register('a');
	assert_eq!(opts.register, Some('a'));
	assert_eq!(parse_cmdline("Rocks", "Rocks log").unwrap().register, None);
}
