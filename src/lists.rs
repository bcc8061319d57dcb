use crate::builder::{Attrs, Builder};
use crate::error::MobmlResult;
use crate::opts::Opts;

impl<'a> Builder<'a> {
    /// A listview: linked list items the toolkit styles into a full-width
    /// mobile list.
    ///
    /// Recognized options:
    /// - `ordered`: emit `ol` instead of `ul` (see [`ordered_list`])
    /// - `filter`: show a client-side search filter
    /// - `split-theme`: becomes `data-split-theme`
    /// - `theme`: mobile theme
    ///
    /// [`ordered_list`]: Builder::ordered_list
    pub fn list<F>(&mut self, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let tag = if opts.take_truthy("ordered") { "ol" } else { "ul" };
        let split_theme = opts.take_str("split-theme");
        let filter = opts.take_truthy("filter");
        opts = opts.set("element", tag).set("data-inset", "true");
        if let Some(split_theme) = split_theme {
            opts = opts.set("data-split-theme", split_theme);
        }
        opts = opts.set("data-filter", if filter { "true" } else { "false" });
        self.role("listview", opts, body)
    }

    /// [`list`] with `ordered` forced on.
    ///
    /// [`list`]: Builder::list
    pub fn ordered_list<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.list(opts.set("ordered", true), body)
    }

    /// A single list item.
    ///
    /// Recognized options:
    /// - `icon`: becomes `data-icon` (the right-side list icon)
    /// - `theme`: becomes `data-theme`
    /// - `item_icon_url`: custom 64x64 icon shown on the left side
    pub fn item<F>(&mut self, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let icon = opts.take_str("icon");
        let theme = opts.take_str("theme");
        let item_icon_url = opts.get_str("item_icon_url");
        let mut attrs = Attrs::from(opts);
        attrs.set_opt("data-icon", icon);
        attrs.set_opt("data-theme", theme);
        self.element("li", attrs, |b| {
            body(b)?;
            if let Some(src) = item_icon_url {
                let mut img = Attrs::new();
                img.set("src", src);
                img.set("class", "ui-li-icon");
                b.void_element("img", img);
            }
            Ok(())
        })
    }

    /// A list item whose content is wrapped in a link. The caller's body
    /// renders once, inside the anchor.
    pub fn link<F>(&mut self, url: &str, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.item(opts, |b| {
            let mut attrs = Attrs::new();
            attrs.set("href", url);
            b.element("a", attrs, body)
        })
    }

    /// A two-line list item: `h3` title first, then the caller's body.
    pub fn nested_item<F>(&mut self, title: &str, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.item(opts, |b| {
            b.element("h3", Attrs::new(), |b| {
                b.text(title);
                Ok(())
            })?;
            body(b)
        })
    }

    /// Capture the small count bubble shown on the right side of a list
    /// item.
    pub fn counter(&mut self, value: &str) -> MobmlResult<String> {
        self.capture(|b| {
            let mut attrs = Attrs::new();
            attrs.set("class", "ui-li-count");
            b.element("span", attrs, |b| {
                b.text(value);
                Ok(())
            })
        })
    }

    /// Capture a thumbnail for the left side of a list item.
    pub fn thumb(&mut self, image_url: &str) -> MobmlResult<String> {
        self.capture(|b| {
            let mut attrs = Attrs::new();
            attrs.set("class", "ui-li-thumb");
            attrs.set("src", image_url);
            b.void_element("img", attrs);
            Ok(())
        })
    }

    /// Capture a list divider, e.g. the letter headings of an
    /// alphabetically sorted contact list.
    pub fn divider(&mut self, title: &str, opts: Opts) -> MobmlResult<String> {
        self.capture(|b| {
            b.role("list-divider", opts.set("element", "li"), |b| {
                b.text(title);
                Ok(())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
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
    fn test_list_defaults_to_ul_with_inset() {
        let html = build(|b| b.list(Opts::new(), |_| Ok(())));
        assert_eq!(
            html,
            r#"<ul data-role="listview" data-inset="true" data-filter="false"></ul>"#
        );
    }

    #[test]
    fn test_ordered_list_emits_ol() {
        let html = build(|b| b.ordered_list(Opts::new(), |_| Ok(())));
        assert!(html.starts_with("<ol "));
        assert!(html.ends_with("</ol>"));
        assert!(html.contains(r#"data-inset="true""#));
    }

    #[test]
    fn test_link_wraps_body_in_anchor_once() {
        let html = build(|b| {
            b.link("a.html", Opts::new().set("icon", "alert"), |b| {
                b.text("go");
                Ok(())
            })
        });
        assert_eq!(
            html,
            r#"<li data-icon="alert"><a href="a.html">go</a></li>"#
        );
    }

    #[test]
    fn test_nested_item_prepends_heading() {
        let html = build(|b| {
            b.nested_item("Title", Opts::new(), |b| {
                b.text("content");
                Ok(())
            })
        });
        assert_eq!(html, "<li><h3>Title</h3>content</li>");
    }

    #[test]
    fn test_divider_is_a_captured_li() {
        let html = build(|b| {
            let divider = b.divider("A", Opts::new())?;
            b.list(Opts::new(), |b| {
                b.raw(&divider);
                Ok(())
            })
        });
        assert!(html.contains(r#"<li data-role="list-divider">A</li>"#));
    }

    #[test]
    fn test_counter_and_thumb_fragments() {
        let html = build(|b| {
            let counter = b.counter("3")?;
            let thumb = b.thumb("/images/computer.png")?;
            b.item(Opts::new(), |b| {
                b.raw(&thumb);
                b.text("Computer");
                b.raw(&counter);
                Ok(())
            })
        });
        assert_eq!(
            html,
            "<li><img class=\"ui-li-thumb\" src=\"/images/computer.png\" />Computer\
             <span class=\"ui-li-count\">3</span></li>"
        );
    }
}
