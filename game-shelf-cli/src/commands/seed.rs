//! Demo data: fifty well-known board games across ten tags, each game
//! holding one to three tags.

use std::path::Path;

use owo_colors::OwoColorize;

use game_shelf_catalog::{NewGame, NewTag};
use game_shelf_db::{attach_tag, create_game, create_tag};

use crate::error::CliError;

const TAGS: [&str; 10] = [
    "Strategy",
    "Family",
    "Party",
    "Cooperative",
    "Card Game",
    "Dice",
    "Abstract",
    "Deck Building",
    "Tile Laying",
    "Word Game",
];

// name, player_min, player_max, estimated_time, min_age
const GAMES: [(&str, i64, Option<i64>, i64, Option<i64>); 50] = [
    ("Catan", 3, Some(4), 90, Some(10)),
    ("Carcassonne", 2, Some(5), 35, Some(7)),
    ("Ticket to Ride", 2, Some(5), 60, Some(8)),
    ("Pandemic", 2, Some(4), 45, Some(8)),
    ("Azul", 2, Some(4), 40, Some(8)),
    ("7 Wonders", 2, Some(7), 30, Some(10)),
    ("Dominion", 2, Some(4), 30, Some(13)),
    ("Splendor", 2, Some(4), 30, Some(10)),
    ("Codenames", 2, Some(8), 15, Some(14)),
    ("Wingspan", 1, Some(5), 70, Some(10)),
    ("Terraforming Mars", 1, Some(5), 120, Some(12)),
    ("Scythe", 1, Some(5), 115, Some(14)),
    ("Gloomhaven", 1, Some(4), 120, Some(14)),
    ("Everdell", 1, Some(4), 80, Some(13)),
    ("Root", 2, Some(4), 90, Some(10)),
    ("Spirit Island", 1, Some(4), 120, Some(13)),
    ("Brass: Birmingham", 2, Some(4), 120, Some(14)),
    ("Great Western Trail", 1, Some(4), 120, Some(12)),
    ("Agricola", 1, Some(5), 120, Some(12)),
    ("Puerto Rico", 3, Some(5), 120, Some(12)),
    ("Power Grid", 2, Some(6), 120, Some(12)),
    ("Concordia", 2, Some(5), 100, Some(13)),
    ("The Castles of Burgundy", 2, Some(4), 90, Some(12)),
    ("Patchwork", 2, Some(2), 30, Some(8)),
    ("Jaipur", 2, Some(2), 30, Some(12)),
    ("Hive", 2, Some(2), 20, Some(9)),
    ("Onitama", 2, Some(2), 20, Some(8)),
    ("Santorini", 2, Some(4), 20, Some(8)),
    ("Kingdomino", 2, Some(4), 20, Some(8)),
    ("Sushi Go!", 2, Some(5), 15, Some(8)),
    ("Love Letter", 2, Some(4), 20, Some(10)),
    ("The Crew", 2, Some(5), 20, Some(10)),
    ("Cascadia", 1, Some(4), 45, Some(10)),
    ("Calico", 1, Some(4), 45, Some(10)),
    ("Sagrada", 1, Some(4), 40, Some(14)),
    ("Quacks of Quedlinburg", 2, Some(4), 45, Some(10)),
    ("Clank!", 2, Some(4), 60, Some(12)),
    ("Lost Ruins of Arnak", 1, Some(4), 90, Some(12)),
    ("Dune: Imperium", 1, Some(4), 120, Some(14)),
    ("Ark Nova", 1, Some(4), 150, Some(14)),
    ("Just One", 3, Some(7), 20, Some(8)),
    ("Wavelength", 2, Some(12), 45, Some(14)),
    ("Telestrations", 4, Some(8), 30, Some(12)),
    ("Dixit", 3, Some(6), 30, Some(8)),
    ("Skull", 3, Some(6), 15, Some(10)),
    ("Bananagrams", 1, Some(8), 15, Some(7)),
    ("Scrabble", 2, Some(4), 90, Some(10)),
    ("Chess", 2, Some(2), 60, Some(6)),
    ("Go", 2, Some(2), 90, Some(8)),
    ("Mysterium", 2, Some(7), 42, Some(10)),
];

/// Populate the database. Running twice duplicates games, so seed into a
/// fresh file.
pub fn run(database: &Path) -> Result<(), CliError> {
    let conn = game_shelf_db::open_database(database)?;

    let mut tag_ids = Vec::with_capacity(TAGS.len());
    for name in TAGS {
        let tag = create_tag(
            &conn,
            &NewTag {
                name: name.to_string(),
            },
        )?;
        tag_ids.push(tag.id);
    }

    let mut attached = 0;
    for (i, (name, player_min, player_max, estimated_time, min_age)) in
        GAMES.iter().enumerate()
    {
        let game = create_game(
            &conn,
            &NewGame {
                name: name.to_string(),
                description: None,
                player_min: *player_min,
                player_max: *player_max,
                estimated_time: Some(*estimated_time),
                min_age: *min_age,
            },
        )?;

        attach_tag(&conn, game.id, tag_ids[i % TAGS.len()])?;
        attached += 1;
        if i % 2 == 0 {
            attach_tag(&conn, game.id, tag_ids[(i + 3) % TAGS.len()])?;
            attached += 1;
        }
        if i % 5 == 0 {
            attach_tag(&conn, game.id, tag_ids[(i + 7) % TAGS.len()])?;
            attached += 1;
        }
    }

    println!(
        "{} {} games, {} tags, {} associations",
        "seeded".green(),
        GAMES.len(),
        TAGS.len(),
        attached
    );
    Ok(())
}
