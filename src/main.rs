use clap::{App, Arg, ArgMatches, value_t};
use log::*;
use std::str::FromStr;

use item_menu::game::item_menu::ItemMenu;
use item_menu::game::world::World;
use item_menu::graphics::Point;
use item_menu::graphics::geometry::{ScrolledGrid, TileGridView};
use item_menu::ui::{Cursor, Event};
use item_menu::ui::modal;

const DEFAULT_OBJECTS: &[&str] = &["bottle", "key", "torch"];

fn validate<T>(v: String) -> Result<(), String>
    where T: FromStr, T::Err: ToString
{
    v.parse::<T>().map(|_| ()).map_err(|e| e.to_string())
}

fn parsed_values<T: FromStr>(matches: &ArgMatches, name: &str) -> Vec<T> {
    // Already checked by the validators.
    matches.values_of(name)
        .map(|vals| vals.filter_map(|v| v.parse().ok()).collect())
        .unwrap_or_else(Vec::new)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("item-menu")
        .about("Runs the item menu against a headless game world fed with scripted input")
        .arg(Arg::with_name("width")
            .long("width")
            .value_name("PIXELS")
            .default_value("640")
            .validator(validate::<u16>))
        .arg(Arg::with_name("height")
            .long("height")
            .value_name("PIXELS")
            .default_value("480")
            .validator(validate::<u16>))
        .arg(Arg::with_name("at")
            .long("at")
            .value_name("X,Y")
            .help("Screen point the objects were clicked at")
            .default_value("160,80")
            .validator(validate::<Point>))
        .arg(Arg::with_name("avatar")
            .long("avatar")
            .value_name("X,Y")
            .help("Avatar tile")
            .default_value("10,10")
            .validator(validate::<Point>))
        .arg(Arg::with_name("object")
            .long("object")
            .value_name("NAME")
            .help("Object stacked under the click point, bottom to top")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1))
        .arg(Arg::with_name("event")
            .long("event")
            .value_name("EVENT")
            .help("Input event: down:BUTTON:X,Y | up:BUTTON:X,Y | move:X,Y | cancel | quit")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .validator(validate::<Event>))
        .arg(Arg::with_name("click")
            .long("click")
            .value_name("X,Y")
            .help("Answer to the target selection prompt")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .validator(validate::<Point>))
        .get_matches();

    let width = value_t!(matches, "width", i32).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", i32).unwrap_or_else(|e| e.exit());
    let at = value_t!(matches, "at", Point).unwrap_or_else(|e| e.exit());
    let avatar_tile = value_t!(matches, "avatar", Point).unwrap_or_else(|e| e.exit());

    let mut world = World::new(width, height);
    let avatar = world.add_object("Avatar", avatar_tile);
    world.set_avatar(avatar);

    let tile = ScrolledGrid::default().from_screen(at);
    let names: Vec<&str> = matches.values_of("object")
        .map(|v| v.collect())
        .unwrap_or_else(|| DEFAULT_OBJECTS.to_vec());
    let created: Vec<_> = names.into_iter()
        .map(|name| world.add_object(name, tile))
        .collect();
    for event in parsed_values::<Event>(&matches, "event") {
        world.push_event(event);
    }
    for click in parsed_values::<Point>(&matches, "click") {
        world.push_click(click);
    }

    let objects: Vec<_> = world.objects_at(at).into_iter()
        .filter(|&h| h != avatar)
        .map(|h| (h, at))
        .collect();
    if objects.is_empty() {
        warn!("nothing to pick at {:?}", at);
        return;
    }
    info!("{} object(s) at {:?}", objects.len(), at);

    let mut menu = ItemMenu::with_objects(&world, objects, at);
    info!("item menu at {:?}", menu.pos());
    modal::run(&mut menu, &mut world, Cursor::Hand);
    menu.finish(&mut world);

    info!("{} world action(s), {} repaint(s)", world.journal().len(), world.drawing().painted());
    for &h in &created {
        if let (Some(obj), Some(placement)) = (world.objects().get(h), world.placement(h)) {
            info!("{}: {}", obj.name.display(), placement);
        }
    }
}
