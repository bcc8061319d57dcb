use mobml::{render, Choice, Config, FormMethod, InputKind, MobmlResult, Opts};
use std::process;

/// Renders a showcase page exercising most helpers and prints it to stdout.
fn main() {
    let config = Config {
        ajax: false,
        ..Config::default()
    };
    match showcase(&config) {
        Ok(html) => println!("{}", html),
        Err(e) => {
            eprintln!("render failed: {}", e);
            process::exit(1);
        }
    }
}

fn showcase(config: &Config) -> MobmlResult<String> {
    render(config, |b| {
        b.page(Opts::new().set("title", "Showcase").theme("c"), |b| {
            b.header(Opts::new(), |b| {
                b.element("h1", mobml::Attrs::new(), |b| {
                    b.text("mobml showcase");
                    Ok(())
                })
            })?;
            b.content(Opts::new(), |b| {
                b.grid(2, |b| {
                    b.column(|b| {
                        let save = b.button("check", "save.html", "Save", Opts::new())?;
                        b.raw(&save);
                        Ok(())
                    })?;
                    b.column(|b| {
                        let load = b.button("refresh", "load.html", "Load", Opts::new())?;
                        b.raw(&load);
                        Ok(())
                    })
                })?;
                b.collapse_set(Opts::new(), |b| {
                    b.collapse("Connections", Opts::new(), |b| {
                        b.list(Opts::new(), |b| {
                            let divider = b.divider("A", Opts::new())?;
                            b.raw(&divider);
                            b.nested_item("Andreas Muller", Opts::new(), |b| {
                                let counter = b.counter("3")?;
                                b.text("Active connections");
                                b.raw(&counter);
                                Ok(())
                            })
                        })
                    })?;
                    b.collapse("Settings", Opts::new().set("collapsed", false), |b| {
                        b.text("Nothing here yet.");
                        Ok(())
                    })
                })?;
                b.form("/save", FormMethod::Post, Opts::new(), |b| {
                    let name = b.input("name", InputKind::Text, Some("Name"), Opts::new())?;
                    b.raw(&name);
                    let city = b.search_input("city", Some("City"), Opts::new())?;
                    b.raw(&city);
                    let cash = b.slider("cash", 0, 100, Some("How much?"), Opts::new())?;
                    b.raw(&cash);
                    let pets = [
                        Choice::placeholder("Choose Pet"),
                        Choice::new("dog", "Dog").checked(),
                        Choice::new("cat", "Cat"),
                    ];
                    let pet = b.select("pet", Some("Select pet"), &pets, Opts::new())?;
                    b.raw(&pet);
                    let submit = b.submit(Some("Save"), Opts::new())?;
                    b.raw(&submit);
                    Ok(())
                })
            })?;
            b.footer(Opts::new().flag("uibar"), |b| {
                b.navbar(Opts::new(), |b| {
                    let one = b.navigate_to("a.html", "One", Opts::new().flag("active"))?;
                    b.raw(&one);
                    let two = b.navigate_to("b.html", "Two", Opts::new())?;
                    b.raw(&two);
                    Ok(())
                })
            })
        })
    })
}
