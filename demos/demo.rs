use std::fs::File;
use std::sync::Arc;

use simplelog::{Config, LevelFilter, WriteLogger};

use formdom::{
    dispatch, Banner, Checkbox, CheckboxState, Content, Element, Event, EventData, FilterChoice,
    FilterState, FocusState, Handler, HandlerRegistry, Key, Modifiers, MultiSelectFilter,
    RadioGroup, RadioState, State, WidgetHandlers,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let agree = State::new(CheckboxState::new(None));
    let priority = State::new(
        RadioState::new([
            ("low".to_string(), "Low"),
            ("medium".to_string(), "Medium"),
            ("high".to_string(), "High"),
        ])
        .with_value("medium".to_string()),
    );
    let colors = State::new(FilterState::new([
        FilterChoice::new("roan", "10").with_count(3),
        FilterChoice::new("palomino", "2"),
        FilterChoice::new("dappled grey", "7").with_count(4),
    ]));

    let registry = HandlerRegistry::new();
    let mut handlers = WidgetHandlers::new();
    let on_change: Handler = Arc::new(|data: &EventData| {
        println!("change: {data:?}");
    });
    handlers.insert("on_change", on_change);

    let mut focus = FocusState::new();
    let mut root = build(&agree, &priority, &colors, &registry, &handlers);

    // Scripted interaction: tab to the first control, toggle the checkbox,
    // bump the priority, open the filter and pick a color. After each batch
    // of events, rebuild only if some state reported dirty.
    for event in focus.handle_key(Key::Tab, Modifiers::new(), &root) {
        dispatch(&event, &registry);
    }
    dispatch(&Event::click("agree"), &registry);
    dispatch(&Event::key("priority-opt-1", Key::Down), &registry);
    dispatch(&Event::click("colors-header"), &registry);
    if any_dirty(&agree, &priority, &colors) {
        root = build(&agree, &priority, &colors, &registry, &handlers);
    }

    dispatch(&Event::click("colors-choice-0"), &registry);
    if any_dirty(&agree, &priority, &colors) {
        root = build(&agree, &priority, &colors, &registry, &handlers);
    }
    print_tree(&root, 0);

    println!();
    println!("agree checked: {}", agree.get().checked);
    println!("priority: {:?}", priority.get().value);
    println!("color filter: {:?}", colors.get().values);
    Ok(())
}

// Non-short-circuiting so every dirty flag is consumed.
fn any_dirty(
    agree: &State<CheckboxState>,
    priority: &State<RadioState<String>>,
    colors: &State<FilterState>,
) -> bool {
    agree.take_dirty() | priority.take_dirty() | colors.take_dirty()
}

fn build(
    agree: &State<CheckboxState>,
    priority: &State<RadioState<String>>,
    colors: &State<FilterState>,
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
) -> Element {
    registry.clear();

    let mut root = Element::container().id("app");

    if let Some(banner) = Banner::new()
        .id("maintenance")
        .dismissible()
        .child(Element::text("Scheduled maintenance tonight"))
        .build(registry, handlers)
    {
        root = root.child(banner);
    }

    root.child(
        Checkbox::new()
            .id("agree")
            .name("agree")
            .label("I agree to terms")
            .state(agree)
            .build(registry, handlers),
    )
    .child(
        RadioGroup::new()
            .id("priority")
            .name("priority")
            .label("Priority")
            .state(priority)
            .build(registry, handlers),
    )
    .child(
        MultiSelectFilter::new()
            .id("colors")
            .header("Horse colors")
            .state(colors)
            .build(registry, handlers),
    )
}

fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    match &element.content {
        Content::Text(text) => println!("{indent}{text}"),
        Content::Children(children) => {
            println!("{indent}[{}]", element.id);
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        Content::None => println!("{indent}[{}]", element.id),
    }
}
