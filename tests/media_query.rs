use responsive_font_sizes::{RfsConfig, compute_font_size};

/// Splice a size pair into a rule the way a stylesheet generator would.
fn render_rule(selector: &str, font_size: &str, config: &RfsConfig) -> String {
    let sizes = compute_font_size(font_size, config).expect("valid configuration");
    let mut css = format!("{selector} {{ font-size: {}; }}\n", sizes.default);
    if sizes.is_fluid() {
        css.push_str(&format!(
            "@media (max-width: {}) {{ {selector} {{ font-size: {}; }} }}\n",
            config.breakpoint, sizes.responsive
        ));
    }
    css
}

#[test]
fn fluid_size_gets_a_media_query() {
    let css = render_rule("h1", "20px", &RfsConfig::default());
    assert_eq!(
        css,
        "h1 { font-size: 20px; }\n\
         @media (max-width: 768px) { h1 { font-size: calc(13.6px + 0.83333vmin); } }\n"
    );
}

#[test]
fn static_size_has_no_media_query() {
    let css = render_rule("small", "12px", &RfsConfig::default());
    assert_eq!(css, "small { font-size: 12px; }\n");
}
