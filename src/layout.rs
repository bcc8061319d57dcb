use crate::builder::{Attrs, Builder, ColumnStack};
use crate::error::{MobmlError, MobmlResult};
use crate::opts::Opts;

/// Column classes handed out by `grid`, in visual order.
const COLUMN_CLASSES: [&str; 3] = ["ui-block-a", "ui-block-b", "ui-block-c"];

impl<'a> Builder<'a> {
    /// Capture the `meta`/`script`/`link` block that wires the mobile
    /// toolkit into a page head. Paths come from the [`Config`] the builder
    /// was constructed with.
    ///
    /// Recognized options:
    /// - `scale`: initial display scale (default 1)
    /// - `no_jquery`: skip the jQuery `script` tag when the page already
    ///   loads it elsewhere
    ///
    /// [`Config`]: crate::Config
    pub fn mobile_include(&mut self, mut opts: Opts) -> MobmlResult<String> {
        let scale = opts.take_str("scale").unwrap_or_else(|| "1".to_string());
        let no_jquery = opts.take_truthy("no_jquery");
        self.capture(|b| {
            let mut meta = Attrs::new();
            meta.set("name", "viewport");
            meta.set(
                "content",
                format!("width=device-width, initial-scale={}", scale),
            );
            b.void_element("meta", meta);
            if !no_jquery {
                let mut script = Attrs::new();
                script.set("type", "text/javascript");
                script.set("src", b.config.jquery_path.clone());
                b.element("script", script, |_| Ok(()))?;
            }
            let mut link = Attrs::new();
            link.set("rel", "stylesheet");
            link.set("href", b.config.mobile_css_path.clone());
            b.void_element("link", link);
            let mut script = Attrs::new();
            script.set("type", "text/javascript");
            script.set("src", b.config.mobile_js_path.clone());
            b.element("script", script, |_| Ok(()))
        })
    }

    /// The top-level `page` container. Ordinary links between pages keep
    /// working while the toolkit layers its transition model on top.
    ///
    /// Recognized options:
    /// - `title`: becomes `data-title`
    /// - `theme`: mobile theme ('a'..'f')
    pub fn page<F>(&mut self, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        if let Some(title) = opts.take_str("title") {
            opts = opts.set("data-title", title);
        }
        self.role("page", opts, body)
    }

    /// Toolbar at the top of the page. Always positioned inline, caller
    /// input notwithstanding.
    pub fn header<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.role("header", opts.set("data-position", "inline"), body)
    }

    /// Main content container.
    pub fn content<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.role("content", opts, body)
    }

    /// A page styled as a modal dialog when reached through a
    /// `data-rel="dialog"` link.
    pub fn dialog<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.role("dialog", opts, body)
    }

    /// Toolbar at the bottom of the page.
    ///
    /// Recognized options:
    /// - `uibar`: pad the bar (adds class `ui-bar`)
    /// - `fixed`: keep the toolbar visible while scrolling
    /// - `theme`: mobile theme
    pub fn footer<F>(&mut self, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        if opts.take_truthy("uibar") {
            opts = opts.set("class", "ui-bar");
        }
        if opts.take_truthy("fixed") {
            opts = opts.set("data-position", "fixed");
        }
        self.role("footer", opts, body)
    }

    /// Navigation bar: up to five links, typically inside a header or
    /// footer. The body renders inside a `ul`; embed [`navigate_to`]
    /// fragments for the entries.
    ///
    /// [`navigate_to`]: Builder::navigate_to
    pub fn navbar<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.role("navbar", opts, |b| b.element("ul", Attrs::new(), body))
    }

    /// Capture one navbar entry: `<li><a href=…>label</a></li>`.
    ///
    /// Recognized options:
    /// - `active`: mark the entry selected (class `ui-btn-active`)
    /// - `icon`: becomes `data-icon`
    pub fn navigate_to(&mut self, url: &str, label: &str, mut opts: Opts) -> MobmlResult<String> {
        let active = opts.take_truthy("active");
        let icon = opts.take_str("icon");
        let mut attrs = Attrs::new();
        attrs.set("href", url);
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        if active {
            attrs.set("class", "ui-btn-active");
        }
        attrs.set_opt("data-icon", icon);
        self.capture(|b| {
            b.element("li", Attrs::new(), |b| {
                b.element("a", attrs, |b| {
                    b.text(label);
                    Ok(())
                })
            })
        })
    }

    /// Visually group a set of buttons into one contained block.
    /// `kind` is `"horizontal"` or `"vertical"`.
    pub fn buttongroup<F>(&mut self, kind: &str, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let mut attrs = Attrs::new();
        attrs.set("data-role", "controlgroup");
        attrs.set("data-type", kind);
        self.element("div", attrs, body)
    }

    /// Capture a navigation button: an anchor styled by the toolkit.
    ///
    /// When AJAX navigation is disabled in the configuration the button
    /// carries `data-ajax="false"`, unless the call opts back in with an
    /// `ajax` option.
    ///
    /// Recognized options:
    /// - `ajax`: override the configured AJAX setting for this button
    /// - `theme`: mobile theme
    pub fn button(
        &mut self,
        icon: &str,
        url: &str,
        label: &str,
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let ajax = opts.take_truthy("ajax");
        let theme = opts.take_str("theme");
        let mut attrs = Attrs::new();
        attrs.set("data-icon", icon);
        attrs.set("data-role", "button");
        attrs.set("href", url);
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        if !self.config.ajax && !ajax {
            attrs.set("data-ajax", "false");
        }
        attrs.set_opt("data-theme", theme);
        self.capture(|b| {
            b.element("a", attrs, |b| {
                b.text(label);
                Ok(())
            })
        })
    }

    /// Same as [`button`] but compact: only as wide as its text and icon.
    ///
    /// [`button`]: Builder::button
    pub fn inline_button(
        &mut self,
        icon: &str,
        url: &str,
        label: &str,
        opts: Opts,
    ) -> MobmlResult<String> {
        self.button(icon, url, label, opts.set("data-inline", "true"))
    }

    /// A two- or three-column block grid (`ui-grid-a` / `ui-grid-b`). Each
    /// nested [`column`] claims the next block class, a/b/c order.
    ///
    /// Any other column count is [`MobmlError::InvalidGridSize`].
    ///
    /// [`column`]: Builder::column
    pub fn grid<F>(&mut self, columns: usize, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let class = match columns {
            2 => "ui-grid-a",
            3 => "ui-grid-b",
            _ => return Err(MobmlError::InvalidGridSize { columns }),
        };
        // Reversed so pops hand out a, b, c in order.
        let remaining = COLUMN_CLASSES[..columns].iter().rev().copied().collect();
        let enclosing = self.columns.replace(ColumnStack {
            slots: columns,
            remaining,
        });
        let mut attrs = Attrs::new();
        attrs.set("class", class);
        let result = self.element("div", attrs, body);
        self.columns = enclosing;
        result
    }

    /// A single grid column. Fails with [`MobmlError::ColumnOutsideGrid`]
    /// outside a [`grid`] block and [`MobmlError::ColumnOverflow`] once the
    /// grid's slots are used up.
    ///
    /// [`grid`]: Builder::grid
    pub fn column<F>(&mut self, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let class = match &mut self.columns {
            None => return Err(MobmlError::ColumnOutsideGrid),
            Some(stack) => match stack.remaining.pop() {
                Some(class) => class,
                None => return Err(MobmlError::ColumnOverflow { slots: stack.slots }),
            },
        };
        let mut attrs = Attrs::new();
        attrs.set("class", class);
        self.element("div", attrs, body)
    }

    /// A collapsible block of content with an `h3` title.
    ///
    /// An explicit `collapsed` option wins, even `false`; otherwise the flag
    /// is inherited from an enclosing [`collapse_set`]. Only a true result
    /// emits `data-collapsed="true"`.
    ///
    /// [`collapse_set`]: Builder::collapse_set
    pub fn collapse<F>(&mut self, title: &str, mut opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let collapsed = match opts.take("collapsed") {
            Some(value) => value.truthy(),
            None => self.collapsed,
        };
        if collapsed {
            opts = opts.set("data-collapsed", "true");
        }
        self.role("collapsible", opts, |b| {
            b.element("h3", Attrs::new(), |b| {
                b.text(title);
                Ok(())
            })?;
            body(b)
        })
    }

    /// Accordion wrapper around a number of [`collapse`] blocks. Directly
    /// nested collapsibles inherit `collapsed` for the duration of the body;
    /// the previous flag is restored afterwards so the state never leaks to
    /// sibling calls.
    ///
    /// [`collapse`]: Builder::collapse
    pub fn collapse_set<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let enclosing = self.collapsed;
        self.collapsed = true;
        let result = self.role("collapsible-set", opts, body);
        self.collapsed = enclosing;
        result
    }
}
