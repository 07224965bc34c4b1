// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section:\n\nParagraph with some content.\n\n- Bullet point:\n  - Nested item\n- Another item\n\n**Bold heading**\n1. first\n2. second\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> quoted text\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_list(depth));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let indent = "  ".repeat(level);
        content.push_str(&format!("{indent}- Label at level {level}:\n"));
        content.push_str(&format!("{indent}  - item one\n"));
        content.push_str(&format!("{indent}  - item two\n"));
    }
    content.push_str("Left aligned closing line\n");
    content
}
