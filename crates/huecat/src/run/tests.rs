use super::*;
use pretty_assertions::assert_eq;

fn dump(input: &[u8], grammar: &Grammar) -> String {
    let mut out = Vec::new();
    dump_tokens(input, grammar, &mut out).unwrap_or_else(|e| panic!("dump: {e}"));
    String::from_utf8(out).unwrap_or_else(|e| panic!("non-UTF-8 dump: {e}"))
}

#[test]
fn dump_lists_spans_classes_and_bytes() {
    assert_eq!(
        dump(b"{\"a\":1}", &Grammar::JSON),
        "0..1 bracket \"{\"\n\
         1..4 string \"\\\"a\\\"\"\n\
         4..5 separator \":\"\n\
         5..6 number \"1\"\n\
         6..7 bracket \"}\"\n"
    );
}

#[test]
fn dump_escapes_control_and_high_bytes() {
    assert_eq!(
        dump(b"\n\xff", &Grammar::JSON),
        "0..1 newline \"\\n\"\n1..2 plain \"\\xff\"\n"
    );
}

#[test]
fn dump_of_empty_input_is_empty() {
    assert_eq!(dump(b"", &Grammar::JSON), "");
}

#[test]
fn dump_counts_tokens() {
    let count = dump_tokens(b"-12", &Grammar::JSON, &mut io::sink())
        .unwrap_or_else(|e| panic!("dump: {e}"));
    assert_eq!(count, 2);
}

#[test]
fn line_start_after_render() {
    let plain = RenderConfig::plain();
    assert!(ends_at_line_start(b"x\n", plain));
    assert!(ends_at_line_start(b"", plain));
    assert!(!ends_at_line_start(b"x", plain));
    assert!(!ends_at_line_start(b"x\n", plain.with_end_marker(true)));
    assert!(!ends_at_line_start(b"x\n", plain.with_line_numbers(true)));
    assert!(ends_at_line_start(b"", plain.with_line_numbers(true)));
}

#[test]
fn exit_code_reflects_failures() {
    assert_eq!(Summary::default().exit_code(), 0);
    assert_eq!(
        Summary {
            rendered: 3,
            failed: 1
        }
        .exit_code(),
        1
    );
}
