use serde::{Deserialize, Serialize};

use crate::builder::{Attrs, Builder};
use crate::error::MobmlResult;
use crate::opts::Opts;

/// HTTP method of a [`form`].
///
/// [`form`]: Builder::form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }
}

/// The `type` of an [`input`] field.
///
/// [`input`]: Builder::input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Password,
    Number,
    Search,
    Range,
    Radio,
    Checkbox,
    Email,
    Url,
    Tel,
    Date,
    Time,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Search => "search",
            InputKind::Range => "range",
            InputKind::Radio => "radio",
            InputKind::Checkbox => "checkbox",
            InputKind::Email => "email",
            InputKind::Url => "url",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::Time => "time",
        }
    }
}

/// One entry of a multi-option field (`select`, `radio`, `checkbox`).
///
/// Pre-checked entries are marked with an explicit `checked` field rather
/// than any convention on the value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Submitted value. `None` marks a select placeholder entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Visible label.
    pub label: String,
    /// Whether the entry starts out selected.
    #[serde(default)]
    pub checked: bool,
}

impl Choice {
    /// An entry with distinct value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: label.into(),
            checked: false,
        }
    }

    /// An entry whose value doubles as its label.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            value: Some(value.clone()),
            label: value,
            checked: false,
        }
    }

    /// A select placeholder: no value, rendered with
    /// `data-placeholder="true"`.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
            checked: false,
        }
    }

    /// Mark the entry pre-checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    fn submitted_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }
}

/// Ruby-style capitalization used for defaulted labels: first character
/// upper, the rest lower.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

impl<'a> Builder<'a> {
    /// Wrapper for a whole HTML form. Carries `data-ajax="false"` when AJAX
    /// navigation is disabled in the configuration and the call does not opt
    /// back in with an `ajax` option.
    pub fn form<F>(
        &mut self,
        url: &str,
        method: FormMethod,
        mut opts: Opts,
        body: F,
    ) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        let ajax = opts.take_truthy("ajax");
        opts = opts.set("method", method.as_str()).set("url", url);
        if !self.config.ajax && !ajax {
            opts = opts.set("data-ajax", "false");
        }
        self.element("form", Attrs::from(opts), body)
    }

    /// The `fieldcontain` wrapper every form field sits in.
    pub fn form_field<F>(&mut self, opts: Opts, body: F) -> MobmlResult<()>
    where
        F: FnOnce(&mut Self) -> MobmlResult<()>,
    {
        self.role("fieldcontain", opts, body)
    }

    fn field_label(&mut self, name: &str, label: Option<&str>) -> MobmlResult<()> {
        let mut attrs = Attrs::new();
        attrs.set("for", name);
        let text = label.map(str::to_string).unwrap_or_else(|| capitalize(name));
        self.element("label", attrs, |b| {
            b.text(&text);
            Ok(())
        })
    }

    /// Capture a labelled input field inside a `fieldcontain`.
    ///
    /// Recognized options: `value`, `placeholder`, `required`, `pattern`,
    /// `min`, `max`, `maxlength` (falling back to `size`), `checked`,
    /// `no_complete` (disables autocompletion). Anything else passes through
    /// to the `input` element.
    pub fn input(
        &mut self,
        name: &str,
        kind: InputKind,
        label: Option<&str>,
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let mut attrs = Attrs::new();
        attrs.set("name", name);
        attrs.set("id", name);
        attrs.set("type", kind.as_str());
        attrs.set_opt("value", opts.take_str("value"));
        attrs.set_opt("placeholder", opts.take_str("placeholder"));
        if opts.take_truthy("required") {
            attrs.set("required", "required");
        }
        attrs.set_opt("pattern", opts.take_str("pattern"));
        attrs.set_opt("min", opts.take_str("min"));
        attrs.set_opt("max", opts.take_str("max"));
        attrs.set_opt(
            "maxlength",
            opts.take_str("maxlength").or_else(|| opts.take_str("size")),
        );
        if opts.take_truthy("checked") {
            attrs.set("checked", "checked");
        }
        if opts.take_truthy("no_complete") {
            attrs.set("autocomplete", "off");
        }
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                b.field_label(name, label)?;
                b.void_element("input", attrs);
                Ok(())
            })
        })
    }

    /// Capture a search field: pill-shaped, with a clear icon once the user
    /// starts typing.
    pub fn search_input(
        &mut self,
        name: &str,
        label: Option<&str>,
        opts: Opts,
    ) -> MobmlResult<String> {
        self.input(
            name,
            InputKind::Search,
            label,
            Opts::new().set("data-type", "search").merge(opts),
        )
    }

    /// Capture a slider: an HTML5 range input with `min`/`max` bounds.
    /// Bounds are not validated; inverted or negative ranges pass through.
    pub fn slider(
        &mut self,
        name: &str,
        min: i64,
        max: i64,
        label: Option<&str>,
        opts: Opts,
    ) -> MobmlResult<String> {
        self.input(
            name,
            InputKind::Range,
            label,
            Opts::new().set("min", min).set("max", max).merge(opts),
        )
    }

    /// Capture a binary flip switch.
    ///
    /// Recognized options:
    /// - `first`: replaces the default "on" value/label
    /// - `second`: replaces the default "off" value/label
    pub fn toggle(&mut self, name: &str, label: Option<&str>, mut opts: Opts) -> MobmlResult<String> {
        let first = opts.take_str("first");
        let second = opts.take_str("second");
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                b.field_label(name, label)?;
                let mut select = Attrs::new();
                select.set("id", name);
                select.set("data-role", "slider");
                b.element("select", select, |b| {
                    let on_value = first.clone().unwrap_or_else(|| "on".to_string());
                    let on_label = first.as_deref().map(capitalize).unwrap_or_else(|| "On".to_string());
                    let mut attrs = Attrs::new();
                    attrs.set("value", on_value);
                    b.element("option", attrs, |b| {
                        b.text(&on_label);
                        Ok(())
                    })?;
                    let off_value = second.clone().unwrap_or_else(|| "off".to_string());
                    let off_label =
                        second.as_deref().map(capitalize).unwrap_or_else(|| "Off".to_string());
                    let mut attrs = Attrs::new();
                    attrs.set("value", off_value);
                    b.element("option", attrs, |b| {
                        b.text(&off_label);
                        Ok(())
                    })
                })
            })
        })
    }

    /// Capture a select menu.
    ///
    /// Recognized options:
    /// - `native`: keep the native control instead of the toolkit skin
    /// - `theme`: mobile theme
    pub fn select(
        &mut self,
        name: &str,
        label: Option<&str>,
        choices: &[Choice],
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let native = opts.take_truthy("native");
        let theme = opts.take_str("theme");
        let mut attrs = Attrs::new();
        attrs.set("id", name);
        attrs.set("data-native-menu", if native { "true" } else { "false" });
        attrs.set_opt("data-theme", theme);
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                b.field_label(name, label)?;
                b.element("select", attrs, |b| {
                    for choice in choices {
                        let mut option = Attrs::new();
                        match &choice.value {
                            Some(value) => option.set("value", value.clone()),
                            None => option.set("data-placeholder", "true"),
                        }
                        b.element("option", option, |b| {
                            b.text(&choice.label);
                            Ok(())
                        })?;
                    }
                    Ok(())
                })
            })
        })
    }

    /// Capture a radio group: a controlgroup fieldset where exactly one
    /// entry can be selected. Mark the pre-selected [`Choice`] with
    /// [`Choice::checked`].
    ///
    /// Recognized options:
    /// - `type`: `"vertical"` (default) or `"horizontal"`
    pub fn radio(
        &mut self,
        name: &str,
        label: Option<&str>,
        choices: &[Choice],
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let group_type = opts.take_str("type").unwrap_or_else(|| "vertical".to_string());
        self.choice_group(name, label, choices, &group_type, InputKind::Radio)
    }

    /// Capture a checkbox group: like [`radio`] but any number of entries
    /// can be selected.
    ///
    /// [`radio`]: Builder::radio
    pub fn checkbox(
        &mut self,
        name: &str,
        label: Option<&str>,
        choices: &[Choice],
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let group_type = opts.take_str("type").unwrap_or_else(|| "vertical".to_string());
        self.choice_group(name, label, choices, &group_type, InputKind::Checkbox)
    }

    fn choice_group(
        &mut self,
        name: &str,
        label: Option<&str>,
        choices: &[Choice],
        group_type: &str,
        kind: InputKind,
    ) -> MobmlResult<String> {
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                let mut fieldset = Attrs::new();
                fieldset.set("data-role", "controlgroup");
                fieldset.set("data-type", group_type);
                b.element("fieldset", fieldset, |b| {
                    let legend = label.map(str::to_string).unwrap_or_else(|| capitalize(name));
                    b.element("legend", Attrs::new(), |b| {
                        b.text(&legend);
                        Ok(())
                    })?;
                    for (index, choice) in choices.iter().enumerate() {
                        let id = format!("{}-choice-{}", name, index);
                        let mut input = Attrs::new();
                        // Checkbox names use the literal string "name", not
                        // the field name; kept for output compatibility
                        // (see DESIGN.md).
                        let input_name = match kind {
                            InputKind::Checkbox => format!("name[{}]", index),
                            _ => name.to_string(),
                        };
                        input.set("name", input_name);
                        input.set("id", id.clone());
                        input.set("type", kind.as_str());
                        input.set("value", choice.submitted_value());
                        if choice.checked {
                            input.set("checked", "checked");
                        }
                        b.void_element("input", input);
                        let mut for_label = Attrs::new();
                        for_label.set("for", id);
                        b.element("label", for_label, |b| {
                            b.text(&choice.label);
                            Ok(())
                        })?;
                    }
                    Ok(())
                })
            })
        })
    }

    /// Capture a multi-line text area. The toolkit auto-grows its height, so
    /// no internal scrollbar appears on mobile.
    ///
    /// Recognized options: `cols`, `rows`, `placeholder`, `required`,
    /// `maxlength`, `content` (initial text). Other options are dropped.
    pub fn textarea(
        &mut self,
        name: &str,
        label: Option<&str>,
        mut opts: Opts,
    ) -> MobmlResult<String> {
        let mut attrs = Attrs::new();
        attrs.set("name", name);
        attrs.set("id", name);
        attrs.set_opt("cols", opts.take_str("cols"));
        attrs.set_opt("rows", opts.take_str("rows"));
        attrs.set_opt("placeholder", opts.take_str("placeholder"));
        if opts.take_truthy("required") {
            attrs.set("required", "required");
        }
        attrs.set_opt("maxlength", opts.take_str("maxlength"));
        let content = opts.take_str("content");
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                b.field_label(name, label)?;
                b.element("textarea", attrs, |b| {
                    if let Some(content) = &content {
                        b.text(content);
                    }
                    Ok(())
                })
            })
        })
    }

    /// Capture the form submit button.
    pub fn submit(&mut self, label: Option<&str>, mut opts: Opts) -> MobmlResult<String> {
        let theme = opts.take_str("theme");
        let mut attrs = Attrs::new();
        attrs.set("type", "submit");
        attrs.set_opt("data-theme", theme);
        for (key, value) in opts.into_entries() {
            attrs.set(key, value.render());
        }
        attrs.set_opt("value", label.map(str::to_string));
        let text = label.unwrap_or("Submit").to_string();
        self.capture(|b| {
            b.form_field(Opts::new(), |b| {
                b.element("button", attrs, |b| {
                    b.text(&text);
                    Ok(())
                })
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
    fn test_capitalize_matches_label_defaults() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("firstName"), "Firstname");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_input_with_required_flag() {
        let html = build(|b| {
            let field = b.input(
                "surname",
                InputKind::Text,
                Some("Name"),
                Opts::new().flag("required"),
            )?;
            b.raw(&field);
            Ok(())
        });
        assert_eq!(
            html,
            "<div data-role=\"fieldcontain\"><label for=\"surname\">Name</label>\
             <input name=\"surname\" id=\"surname\" type=\"text\" required=\"required\" /></div>"
        );
    }

    #[test]
    fn test_input_omits_absent_options() {
        let html = build(|b| {
            let field = b.input("name", InputKind::Text, None, Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(!html.contains("value="));
        assert!(!html.contains("placeholder="));
        assert!(html.contains(r#"<input name="name" id="name" type="text" />"#));
    }

    #[test]
    fn test_maxlength_falls_back_to_size() {
        let html = build(|b| {
            let field = b.input("code", InputKind::Text, None, Opts::new().set("size", 8))?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"maxlength="8""#));
    }

    #[test]
    fn test_search_input_sets_data_type() {
        let html = build(|b| {
            let field = b.search_input("city", Some("City"), Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"type="search""#));
        assert!(html.contains(r#"data-type="search""#));
    }

    #[test]
    fn test_slider_bounds_pass_through_unchecked() {
        let html = build(|b| {
            let field = b.slider("cash", -5, 100, Some("How much?"), Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"type="range""#));
        assert!(html.contains(r#"min="-5""#));
        assert!(html.contains(r#"max="100""#));
    }

    #[test]
    fn test_toggle_defaults_on_off() {
        let html = build(|b| {
            let field = b.toggle("question", Some("Be or not to be?"), Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"<select id="question" data-role="slider">"#));
        assert!(html.contains(r#"<option value="on">On</option>"#));
        assert!(html.contains(r#"<option value="off">Off</option>"#));
    }

    #[test]
    fn test_select_placeholder_and_pairs() {
        let choices = [
            Choice::placeholder("Choose Pet"),
            Choice::new("dog", "Dog"),
            Choice::new("cat", "Cat"),
        ];
        let html = build(|b| {
            let field = b.select("pet", Some("Select pet"), &choices, Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"data-native-menu="false""#));
        assert!(html.contains(r#"<option data-placeholder="true">Choose Pet</option>"#));
        assert!(html.contains(r#"<option value="dog">Dog</option>"#));
    }

    #[test]
    fn test_radio_checked_marker() {
        let choices = [
            Choice::plain("cat"),
            Choice::plain("dog").checked(),
        ];
        let html = build(|b| {
            let field = b.radio("pet", Some("Choose pet"), &choices, Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(
            r#"<input name="pet" id="pet-choice-0" type="radio" value="cat" />"#
        ));
        assert!(html.contains(
            r#"<input name="pet" id="pet-choice-1" type="radio" value="dog" checked="checked" />"#
        ));
        assert!(html.contains(r#"data-type="vertical""#));
    }

    #[test]
    fn test_checkbox_name_uses_literal_name_string() {
        let choices = [Choice::plain("cat"), Choice::plain("dog")];
        let html = build(|b| {
            let field = b.checkbox("pet", None, &choices, Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"name="name[0]""#));
        assert!(html.contains(r#"name="name[1]""#));
        assert!(html.contains(r#"<legend>Pet</legend>"#));
    }

    #[test]
    fn test_textarea_content_is_escaped() {
        let html = build(|b| {
            let field = b.textarea(
                "text",
                None,
                Opts::new().set("rows", 4).set("content", "a < b"),
            )?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"<textarea name="text" id="text" rows="4">a &lt; b</textarea>"#));
    }

    #[test]
    fn test_submit_defaults_label() {
        let html = build(|b| {
            let field = b.submit(None, Opts::new())?;
            b.raw(&field);
            Ok(())
        });
        assert!(html.contains(r#"<button type="submit">Submit</button>"#));
    }

    #[test]
    fn test_form_carries_data_ajax_when_disabled() {
        let config = Config {
            ajax: false,
            ..Config::default()
        };
        let mut b = Builder::new(&config);
        b.form("/save", FormMethod::Post, Opts::new(), |_| Ok(()))
            .unwrap();
        assert_eq!(
            b.finish(),
            r#"<form method="post" url="/save" data-ajax="false"></form>"#
        );
    }

    #[test]
    fn test_form_explicit_ajax_opt_in() {
        let config = Config {
            ajax: false,
            ..Config::default()
        };
        let mut b = Builder::new(&config);
        b.form("/save", FormMethod::Get, Opts::new().flag("ajax"), |_| Ok(()))
            .unwrap();
        assert_eq!(b.finish(), r#"<form method="get" url="/save"></form>"#);
    }
}
