//! Recording and exporting console output.

use rich::ColorSystem;
use rich_console::{Console, HtmlOptions, PrintOptions, SharedBuffer};

fn recording_console() -> Console {
    Console::builder()
        .color_system(ColorSystem::TrueColor)
        .file(SharedBuffer::new())
        .record(true)
        .width(100)
        .build()
}

#[test]
fn export_text() {
    let mut console = recording_console();
    console.print("[b]foo").unwrap();
    assert_eq!(console.export_text(false), "foo\n");
}

#[test]
fn export_html() {
    let mut console = recording_console();
    console.print("[b]foo").unwrap();
    let html = console.export_html(&HtmlOptions::default());
    let expected = "<!DOCTYPE html>\n<head>\n<style>\n.r1 {font-weight: bold}\nbody {\n    color: #000000;\n    background-color: #ffffff;\n}\n</style>\n</head>\n<html>\n<body>\n    <code>\n        <pre style=\"font-family:Menlo,'DejaVu Sans Mono',consolas,'Courier New',monospace\"><span class=\"r1\">foo</span>\n</pre>\n    </code>\n</body>\n</html>\n";
    assert_eq!(html, expected);
}

#[test]
fn export_html_inline() {
    let mut console = recording_console();
    console.print("[b]foo").unwrap();
    let html = console.export_html(&HtmlOptions::inline());
    let expected = "<!DOCTYPE html>\n<head>\n<style>\n\nbody {\n    color: #000000;\n    background-color: #ffffff;\n}\n</style>\n</head>\n<html>\n<body>\n    <code>\n        <pre style=\"font-family:Menlo,'DejaVu Sans Mono',consolas,'Courier New',monospace\"><span style=\"font-weight: bold\">foo</span>\n</pre>\n    </code>\n</body>\n</html>\n";
    assert_eq!(html, expected);
}

#[test]
fn export_html_numbers_only_styled_classes() {
    let mut console = recording_console();
    let options = PrintOptions::new().highlight(false);
    console
        .print_with("[link=https://x.io]a[/link] [b]b", &options)
        .unwrap();
    let html = console.export_html(&HtmlOptions::default());
    assert!(html.contains("<style>\n.r1 {font-weight: bold}\nbody {"));
    assert!(html.contains("<a href=\"https://x.io\">a</a> <span class=\"r1\">b</span>\n</pre>"));
}

#[test]
fn export_keeps_history_unless_cleared() {
    let mut console = recording_console();
    console.print("one").unwrap();
    assert_eq!(console.export_text(false), "one\n");
    console.print("two").unwrap();
    assert_eq!(console.export_text(true), "one\ntwo\n");
    assert!(console.recorded().is_empty());
    assert_eq!(console.export_text(false), "");
}

#[test]
fn html_clear_option() {
    let mut console = recording_console();
    console.print("x").unwrap();
    let options = HtmlOptions {
        clear: true,
        ..HtmlOptions::default()
    };
    console.export_html(&options);
    assert!(console.recorded().is_empty());
}

#[test]
fn history_is_not_wrapped() {
    let mut console = Console::builder()
        .file(SharedBuffer::new())
        .record(true)
        .width(3)
        .build();
    console.print("abcdef").unwrap();
    assert_eq!(console.export_text(false), "abcdef\n");
}

#[test]
fn export_skips_cursor_controls() {
    let mut console = recording_console();
    console.show_cursor(false).unwrap();
    console.print("foo").unwrap();
    console.show_cursor(true).unwrap();
    assert_eq!(console.recorded().len(), 4);
    assert_eq!(console.export_text(false), "foo\n");
}

#[test]
fn non_recording_console_records_nothing() {
    let mut console = Console::builder().file(SharedBuffer::new()).build();
    console.print("foo").unwrap();
    assert!(!console.is_recording());
    assert_eq!(console.export_text(false), "");
}

#[test]
fn html_escapes_text() {
    let mut console = recording_console();
    console.print_styled("a < b & c", "italic").unwrap();
    let html = console.export_html(&HtmlOptions::inline());
    assert!(html.contains("a &lt; b &amp; c"));
}
