use indexmap::IndexMap;

use crate::config::Config;
use crate::error::MobmlResult;
use crate::opts::Opts;

/// Escape a string for use in text content or a double-quoted attribute.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Ordered attribute map for one element.
///
/// Insertion order is the emission order, so helpers build their fixed
/// attributes first and merge caller options after. Absent optional values
/// are simply never inserted — they are omitted from the output entirely
/// rather than emitted as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: IndexMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. Replacing an existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Set an attribute only when a value is present.
    pub fn set_opt(&mut self, key: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn write_to(&self, out: &mut String) {
        for (key, value) in &self.entries {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
    }
}

impl From<Opts> for Attrs {
    fn from(opts: Opts) -> Self {
        let mut attrs = Attrs::new();
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        attrs
    }
}

/// Column classes still unclaimed inside the current grid block.
#[derive(Debug, Clone)]
pub(crate) struct ColumnStack {
    pub(crate) slots: usize,
    pub(crate) remaining: Vec<&'static str>,
}

/// Per-render markup builder.
///
/// One `Builder` exists per fragment render. It owns the output buffer and
/// the two pieces of transient composition state (the grid column stack and
/// the inherited collapsed flag), and borrows the application [`Config`]
/// read-only. Nothing is shared between renders, so concurrent requests each
/// construct their own builder and cannot observe each other's state.
///
/// ```ignore
/// use mobml::{Builder, Config, Opts};
///
/// let config = Config::default();
/// let mut b = Builder::new(&config);
/// b.page(Opts::new().set("title", "Home"), |b| {
///     b.header(Opts::new(), |b| {
///         b.element("h1", mobml::Attrs::new(), |b| {
///             b.text("Header");
///             Ok(())
///         })
///     })
/// })?;
/// let html = b.finish();
/// # mobml::MobmlResult::Ok(())
/// ```
#[derive(Debug)]
pub struct Builder<'a> {
    out: String,
    pub(crate) config: &'a Config,
    /// Column state of the innermost enclosing grid, if any.
    pub(crate) columns: Option<ColumnStack>,
    /// Collapsed flag inherited by collapsibles inside a collapsible set.
    pub(crate) collapsed: bool,
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            out: String::new(),
            config,
            columns: None,
            collapsed: false,
        }
    }

    /// Consume the builder and return the rendered fragment.
    pub fn finish(self) -> String {
        self.out
    }

    /// Emit one element: open tag, run the child continuation inside it,
    /// close tag. This is the sole primitive every helper is built from; it
    /// knows nothing about roles.
    pub fn element<F>(&mut self, tag: &str, attrs: Attrs, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.open_tag(tag, &attrs, false);
        body(self)?;
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        Ok(())
    }

    /// Emit a childless void element (`meta`, `link`, `input`, `img`, …).
    pub fn void_element(&mut self, tag: &str, attrs: Attrs) {
        self.open_tag(tag, &attrs, true);
    }

    /// Append escaped text content.
    pub fn text(&mut self, content: &str) {
        self.out.push_str(&escape_html(content));
    }

    /// Append a previously captured fragment without re-escaping.
    pub fn raw(&mut self, fragment: &str) {
        self.out.push_str(fragment);
    }

    /// Run a continuation against an empty buffer and return whatever it
    /// emitted, leaving the surrounding output untouched. Composition state
    /// (columns, collapsed flag, config) stays live during the capture, so a
    /// captured fragment is byte-identical to the same calls made inline.
    pub fn capture<F>(&mut self, body: F) -> MobmlResult<String>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let saved = std::mem::take(&mut self.out);
        let result = body(self);
        let captured = std::mem::replace(&mut self.out, saved);
        result.map(|_| captured)
    }

    /// Emit a role element: `data-role` plus normalized caller options.
    ///
    /// Normalization rules, in order: start from `{"data-role": name}`;
    /// rename `theme` to `data-theme`; honor an `element` option as tag
    /// override (default `div`); merge everything else verbatim in caller
    /// order. Unknown keys pass through — deliberately.
    pub(crate) fn role<F>(&mut self, name: &str, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let mut attrs = Attrs::new();
        attrs.set("data-role", name);
        if let Some(theme) = opts.take_str("theme") {
            attrs.set("data-theme", theme);
        }
        let tag = opts.take_str("element").unwrap_or_else(|| "div".to_string());
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        self.element(&tag, attrs, body)
    }

    fn open_tag(&mut self, tag: &str, attrs: &Attrs, self_close: bool) {
        self.out.push('<');
        self.out.push_str(tag);
        attrs.write_to(&mut self.out);
        if self_close {
            self.out.push_str(" />");
        } else {
            self.out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build<F>(f: F) -> String
    where
        F: FnOnce(&mut Builder) -> MobmlResult<()>,
    {
        let config = Config::default();
        let mut b = Builder::new(&config);
        f(&mut b).unwrap();
        b.finish()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_element_nesting() {
        let html = build(|b| {
            b.element("div", Attrs::new(), |b| {
                b.element("span", Attrs::new(), |b| {
                    b.text("hi");
                    Ok(())
                })
            })
        });
        assert_eq!(html, "<div><span>hi</span></div>");
    }

    #[test]
    fn test_attrs_emitted_in_insertion_order() {
        let html = build(|b| {
            let mut attrs = Attrs::new();
            attrs.set("data-role", "page");
            attrs.set("data-title", "Test1");
            attrs.set_opt("data-theme", None);
            b.element("div", attrs, |_| Ok(()))
        });
        assert_eq!(html, r#"<div data-role="page" data-title="Test1"></div>"#);
    }

    #[test]
    fn test_void_element_self_closes() {
        let html = build(|b| {
            let mut attrs = Attrs::new();
            attrs.set("src", "/a.js");
            b.void_element("script", attrs);
            Ok(())
        });
        assert_eq!(html, r#"<script src="/a.js" />"#);
    }

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        let html = build(|b| {
            b.text("<b>");
            b.raw("<b>");
            Ok(())
        });
        assert_eq!(html, "&lt;b&gt;<b>");
    }

    #[test]
    fn test_capture_leaves_outer_output_untouched() {
        let html = build(|b| {
            b.text("before");
            let inner = b.capture(|b| {
                b.element("em", Attrs::new(), |b| {
                    b.text("x");
                    Ok(())
                })
            })?;
            assert_eq!(inner, "<em>x</em>");
            b.text("after");
            b.raw(&inner);
            Ok(())
        });
        assert_eq!(html, "beforeafter<em>x</em>");
    }

    #[test]
    fn test_role_renames_theme_and_passes_unknown_keys() {
        let html = build(|b| {
            b.role(
                "page",
                Opts::new().theme("c").set("data-transition", "pop"),
                |_| Ok(()),
            )
        });
        assert_eq!(
            html,
            r#"<div data-role="page" data-theme="c" data-transition="pop"></div>"#
        );
    }

    #[test]
    fn test_role_honors_element_override() {
        let html = build(|b| b.role("list-divider", Opts::new().set("element", "li"), |_| Ok(())));
        assert_eq!(html, r#"<li data-role="list-divider"></li>"#);
    }
}
