use super::*;
use pretty_assertions::assert_eq;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("huecat").chain(argv.iter().copied()))
        .unwrap_or_else(|e| panic!("parse {argv:?}: {e}"))
}

#[test]
fn clap_definition_is_consistent() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}

#[test]
fn defaults() {
    let args = parse(&[]);
    assert_eq!(args.color, ColorChoice::Auto);
    assert_eq!(args.grammar, GrammarName::Json);
    assert!(!args.number && !args.info && !args.show_end && !args.ascii && !args.tokens);
    assert_eq!(args.sources(), vec![SourceSpec::Stdin]);
}

#[test]
fn short_flags_combine() {
    let args = parse(&["-niea", "data.json"]);
    assert!(args.number);
    assert!(args.info);
    assert!(args.show_end);
    assert!(args.ascii);
    assert_eq!(
        args.sources(),
        vec![SourceSpec::File(PathBuf::from("data.json"))]
    );
}

#[test]
fn dash_means_stdin_in_order() {
    let args = parse(&["a.json", "-", "b.json"]);
    assert_eq!(
        args.sources(),
        vec![
            SourceSpec::File(PathBuf::from("a.json")),
            SourceSpec::Stdin,
            SourceSpec::File(PathBuf::from("b.json")),
        ]
    );
}

#[test]
fn grammar_names() {
    assert_eq!(parse(&["--grammar", "basic"]).grammar.grammar(), Grammar::BASIC);
    assert_eq!(parse(&["--grammar=json"]).grammar.grammar(), Grammar::JSON);
    assert!(Args::try_parse_from(["huecat", "--grammar", "yaml"]).is_err());
}

// === Color Resolution ===

#[test]
fn no_color_flag_beats_always() {
    let args = parse(&["--color", "always", "--no-color"]);
    assert_eq!(args.color_mode(false), ColorMode::Never);
}

#[test]
fn no_color_env_downgrades_auto_only() {
    assert_eq!(parse(&[]).color_mode(true), ColorMode::Never);
    assert_eq!(parse(&["--color", "always"]).color_mode(true), ColorMode::Always);
    assert_eq!(parse(&[]).color_mode(false), ColorMode::Auto);
}

#[test]
fn auto_on_terminal_colors_with_unicode() {
    let config = parse(&["-n"]).render_config(TerminalCaps::INTERACTIVE, false);
    assert_eq!(
        config,
        RenderConfig::plain().with_line_numbers(true).with_color(true)
    );
}

#[test]
fn auto_into_pipe_is_ascii_without_color() {
    let config = parse(&["-n", "-i"]).render_config(TerminalCaps::REDIRECTED, false);
    assert_eq!(
        config,
        RenderConfig::plain()
            .with_line_numbers(true)
            .with_header(true)
            .with_ascii_only(true)
    );
}

#[test]
fn always_into_pipe_keeps_unicode() {
    let config = parse(&["--color", "always"]).render_config(TerminalCaps::REDIRECTED, false);
    assert!(config.color_enabled);
    assert!(!config.ascii_only);
}

#[test]
fn options_carry_grammar_and_token_mode() {
    let options = parse(&["--tokens", "--grammar", "basic"]).options(TerminalCaps::REDIRECTED, false);
    assert!(options.dump_tokens);
    assert_eq!(options.grammar, Grammar::BASIC);
    assert_eq!(options.limit, DEFAULT_CAPACITY);
}
