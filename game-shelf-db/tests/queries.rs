use game_shelf_catalog::{GameFilters, NewGame, NewTag, PageRequest};
use game_shelf_db::*;

fn game(name: &str, player_min: i64, player_max: Option<i64>) -> NewGame {
    NewGame {
        name: name.to_string(),
        description: None,
        player_min,
        player_max,
        estimated_time: Some(60),
        min_age: None,
    }
}

fn by_tags(tag_ids: Vec<i64>) -> GameFilters {
    GameFilters {
        tag_ids,
        ..GameFilters::default()
    }
}

fn by_search(term: &str) -> GameFilters {
    GameFilters {
        search: Some(term.to_string()),
        ..GameFilters::default()
    }
}

// ── Pagination ──────────────────────────────────────────────────────────────

#[test]
fn fifty_games_paginate_into_five_pages() {
    let conn = open_memory().unwrap();
    for i in 1..=50 {
        create_game(&conn, &game(&format!("Game {i:02}"), 2, Some(4))).unwrap();
    }

    let first = list_games(&conn, &GameFilters::default(), &PageRequest::default()).unwrap();
    assert_eq!(first.data.len(), 12);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.last_page, 5);
    assert_eq!(first.per_page, 12);
    assert_eq!(first.total, 50);
    assert!(first.has_more);

    let last = list_games(&conn, &GameFilters::default(), &PageRequest::new(5, 12)).unwrap();
    assert_eq!(last.data.len(), 2);
    assert!(!last.has_more);

    // Every game appears exactly once across the pages
    let mut seen = Vec::new();
    for page in 1..=5 {
        let result =
            list_games(&conn, &GameFilters::default(), &PageRequest::new(page, 12)).unwrap();
        seen.extend(result.data.iter().map(|g| g.id));
    }
    assert_eq!(seen.len(), 50);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 50);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let conn = open_memory().unwrap();
    for i in 1..=3 {
        create_game(&conn, &game(&format!("Game {i}"), 1, None)).unwrap();
    }
    let result = list_games(&conn, &GameFilters::default(), &PageRequest::new(7, 12)).unwrap();
    assert!(result.data.is_empty());
    assert_eq!(result.current_page, 7);
    assert_eq!(result.total, 3);
    assert!(!result.has_more);
}

#[test]
fn newest_games_come_first() {
    let conn = open_memory().unwrap();
    let a = create_game(&conn, &game("Oldest", 2, None)).unwrap();
    let b = create_game(&conn, &game("Middle", 2, None)).unwrap();
    let c = create_game(&conn, &game("Newest", 2, None)).unwrap();

    let result = list_games(&conn, &GameFilters::default(), &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

// ── Search ──────────────────────────────────────────────────────────────────

#[test]
fn search_matches_name_description_and_tag_names() {
    let conn = open_memory().unwrap();
    let catan = create_game(&conn, &game("Catan", 3, Some(4))).unwrap();
    let chess = create_game(
        &conn,
        &NewGame {
            description: Some("classic strategy duel".to_string()),
            ..game("Chess", 2, Some(2))
        },
    )
    .unwrap();
    let azul = create_game(&conn, &game("Azul", 2, Some(4))).unwrap();
    let strategy = create_tag(
        &conn,
        &NewTag {
            name: "strategy".to_string(),
        },
    )
    .unwrap();
    attach_tag(&conn, azul.id, strategy.id).unwrap();

    let result = list_games(&conn, &by_search("strategy"), &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert!(ids.contains(&chess.id), "description should match");
    assert!(ids.contains(&azul.id), "tag name should match");
    assert!(!ids.contains(&catan.id));

    // Substring match is case-insensitive
    let result = list_games(&conn, &by_search("STRAT"), &PageRequest::default()).unwrap();
    assert_eq!(result.total, 2);
}

#[test]
fn blank_search_is_no_filter() {
    let conn = open_memory().unwrap();
    for i in 1..=4 {
        create_game(&conn, &game(&format!("Game {i}"), 2, None)).unwrap();
    }
    let result = list_games(&conn, &by_search("   "), &PageRequest::default()).unwrap();
    assert_eq!(result.total, 4);
}

// ── Tag Filter ──────────────────────────────────────────────────────────────

#[test]
fn tag_filter_requires_every_requested_tag() {
    let conn = open_memory().unwrap();
    let only_a = create_game(&conn, &game("Only A", 2, None)).unwrap();
    let both = create_game(&conn, &game("Both", 2, None)).unwrap();
    let only_b = create_game(&conn, &game("Only B", 2, None)).unwrap();
    create_game(&conn, &game("Neither", 2, None)).unwrap();

    let a = create_tag(&conn, &NewTag { name: "A".into() }).unwrap();
    let b = create_tag(&conn, &NewTag { name: "B".into() }).unwrap();
    attach_tag(&conn, only_a.id, a.id).unwrap();
    attach_tag(&conn, both.id, a.id).unwrap();
    attach_tag(&conn, both.id, b.id).unwrap();
    attach_tag(&conn, only_b.id, b.id).unwrap();

    let result = list_games(&conn, &by_tags(vec![a.id, b.id]), &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![both.id]);

    // A single requested tag admits supersets
    let result = list_games(&conn, &by_tags(vec![a.id]), &PageRequest::default()).unwrap();
    assert_eq!(result.total, 2);
}

#[test]
fn strategy_tag_scenario() {
    // 50 games, 10 tags, "Strategy" on games #3, #7, and #9
    let conn = open_memory().unwrap();
    let mut game_ids = Vec::new();
    for i in 1..=50 {
        game_ids.push(create_game(&conn, &game(&format!("Game {i:02}"), 2, Some(6))).unwrap().id);
    }
    let mut strategy_id = 0;
    for name in [
        "Strategy", "Family", "Party", "Cooperative", "Cards", "Dice", "Abstract", "Trivia",
        "Word", "Dexterity",
    ] {
        let tag = create_tag(
            &conn,
            &NewTag {
                name: name.to_string(),
            },
        )
        .unwrap();
        if name == "Strategy" {
            strategy_id = tag.id;
        }
    }
    for idx in [3, 7, 9] {
        attach_tag(&conn, game_ids[idx - 1], strategy_id).unwrap();
    }

    let result = list_games(&conn, &by_tags(vec![strategy_id]), &PageRequest::default()).unwrap();
    assert_eq!(result.total, 3);
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    // Newest first: creation order reversed
    assert_eq!(ids, vec![game_ids[8], game_ids[6], game_ids[2]]);
}

#[test]
fn game_matching_several_requested_tags_appears_once() {
    let conn = open_memory().unwrap();
    let dune = create_game(
        &conn,
        &NewGame {
            description: Some("dune-themed negotiation".to_string()),
            ..game("Dune", 2, Some(6))
        },
    )
    .unwrap();
    let duel = create_tag(&conn, &NewTag { name: "duel".into() }).unwrap();
    let dungeon = create_tag(
        &conn,
        &NewTag {
            name: "dungeon".into(),
        },
    )
    .unwrap();
    attach_tag(&conn, dune.id, duel.id).unwrap();
    attach_tag(&conn, dune.id, dungeon.id).unwrap();

    // Both requested tags held, plus a search hitting name, description,
    // and both tag names: still exactly one row
    let filters = GameFilters {
        search: Some("du".to_string()),
        tag_ids: vec![duel.id, dungeon.id],
        ..GameFilters::default()
    };
    let result = list_games(&conn, &filters, &PageRequest::default()).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].id, dune.id);
}

#[test]
fn empty_tag_list_is_no_filter() {
    let conn = open_memory().unwrap();
    for i in 1..=3 {
        create_game(&conn, &game(&format!("Game {i}"), 2, None)).unwrap();
    }
    let result = list_games(&conn, &by_tags(Vec::new()), &PageRequest::default()).unwrap();
    assert_eq!(result.total, 3);
}

// ── Numeric Filters ─────────────────────────────────────────────────────────

#[test]
fn player_count_means_can_this_many_play() {
    let conn = open_memory().unwrap();
    let small = create_game(&conn, &game("Small Box", 2, Some(4))).unwrap();
    let open_ended = create_game(&conn, &game("Open Ended", 5, None)).unwrap();

    let five = GameFilters {
        player_count: Some(5),
        ..GameFilters::default()
    };
    let result = list_games(&conn, &five, &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![open_ended.id]);

    let three = GameFilters {
        player_count: Some(3),
        ..GameFilters::default()
    };
    let result = list_games(&conn, &three, &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![small.id]);
}

#[test]
fn min_age_filter_keeps_games_suitable_for_that_age() {
    let conn = open_memory().unwrap();
    let anyone = create_game(&conn, &game("Anyone", 2, None)).unwrap();
    let six_up = create_game(
        &conn,
        &NewGame {
            min_age: Some(6),
            ..game("Six Up", 2, None)
        },
    )
    .unwrap();
    let twelve_up = create_game(
        &conn,
        &NewGame {
            min_age: Some(12),
            ..game("Twelve Up", 2, None)
        },
    )
    .unwrap();

    let eight = GameFilters {
        min_age: Some(8),
        ..GameFilters::default()
    };
    let result = list_games(&conn, &eight, &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert!(ids.contains(&anyone.id));
    assert!(ids.contains(&six_up.id));
    assert!(!ids.contains(&twelve_up.id));

    // A higher filter value broadens the result set
    let fourteen = GameFilters {
        min_age: Some(14),
        ..GameFilters::default()
    };
    let result = list_games(&conn, &fourteen, &PageRequest::default()).unwrap();
    assert_eq!(result.total, 3);
}

#[test]
fn filters_combine_as_a_conjunction() {
    let conn = open_memory().unwrap();
    let fits = create_game(
        &conn,
        &NewGame {
            description: Some("worker placement harvest".to_string()),
            min_age: Some(10),
            ..game("Harvest Moon", 1, Some(4))
        },
    )
    .unwrap();
    let wrong_players = create_game(
        &conn,
        &NewGame {
            description: Some("harvest racing".to_string()),
            ..game("Harvest Sprint", 5, Some(8))
        },
    )
    .unwrap();
    let wrong_tag = create_game(
        &conn,
        &NewGame {
            description: Some("harvest bluffing".to_string()),
            ..game("Harvest Bluff", 2, Some(4))
        },
    )
    .unwrap();

    let euro = create_tag(&conn, &NewTag { name: "Euro".into() }).unwrap();
    attach_tag(&conn, fits.id, euro.id).unwrap();
    attach_tag(&conn, wrong_players.id, euro.id).unwrap();

    let filters = GameFilters {
        search: Some("harvest".to_string()),
        tag_ids: vec![euro.id],
        player_count: Some(3),
        min_age: Some(12),
    };
    let result = list_games(&conn, &filters, &PageRequest::default()).unwrap();
    let ids: Vec<i64> = result.data.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![fits.id]);
    assert!(!ids.contains(&wrong_tag.id));
}

// ── Embedded Tags ───────────────────────────────────────────────────────────

#[test]
fn listed_games_carry_their_tags_sorted_by_name() {
    let conn = open_memory().unwrap();
    let game_row = create_game(&conn, &game("Everdell", 1, Some(4))).unwrap();
    for name in ["Worker Placement", "Animals", "Engine Building"] {
        let tag = create_tag(
            &conn,
            &NewTag {
                name: name.to_string(),
            },
        )
        .unwrap();
        attach_tag(&conn, game_row.id, tag.id).unwrap();
    }

    let result = list_games(&conn, &GameFilters::default(), &PageRequest::default()).unwrap();
    let names: Vec<&str> = result.data[0].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Animals", "Engine Building", "Worker Placement"]);

    let fetched = find_game(&conn, game_row.id).unwrap().unwrap();
    assert_eq!(fetched.tags.len(), 3);
}

#[test]
fn find_game_missing_is_none() {
    let conn = open_memory().unwrap();
    assert!(find_game(&conn, 123).unwrap().is_none());
}

// ── Tag Queries ─────────────────────────────────────────────────────────────

#[test]
fn tag_listing_counts_games_and_paginates() {
    let conn = open_memory().unwrap();
    let g1 = create_game(&conn, &game("One", 2, None)).unwrap();
    let g2 = create_game(&conn, &game("Two", 2, None)).unwrap();
    let party = create_tag(&conn, &NewTag { name: "Party".into() }).unwrap();
    create_tag(&conn, &NewTag { name: "Solo".into() }).unwrap();
    attach_tag(&conn, g1.id, party.id).unwrap();
    attach_tag(&conn, g2.id, party.id).unwrap();

    let all = list_tags_all(&conn, None).unwrap();
    assert_eq!(all.len(), 2);
    let party_row = all.iter().find(|t| t.name == "Party").unwrap();
    assert_eq!(party_row.games_count, Some(2));
    let solo_row = all.iter().find(|t| t.name == "Solo").unwrap();
    assert_eq!(solo_row.games_count, Some(0));

    let paged = list_tags(&conn, None, &PageRequest::new(1, 1)).unwrap();
    assert_eq!(paged.data.len(), 1);
    assert_eq!(paged.total, 2);
    assert_eq!(paged.last_page, 2);
    assert!(paged.has_more);

    let searched = list_tags(&conn, Some("par"), &PageRequest::default()).unwrap();
    assert_eq!(searched.total, 1);
    assert_eq!(searched.data[0].name, "Party");
}

#[test]
fn tag_detail_lists_its_games_newest_first() {
    let conn = open_memory().unwrap();
    let older = create_game(&conn, &game("Older", 2, None)).unwrap();
    let newer = create_game(&conn, &game("Newer", 2, None)).unwrap();
    create_game(&conn, &game("Untagged", 2, None)).unwrap();
    let tag = create_tag(&conn, &NewTag { name: "Filler".into() }).unwrap();
    attach_tag(&conn, older.id, tag.id).unwrap();
    attach_tag(&conn, newer.id, tag.id).unwrap();

    let detail = find_tag(&conn, tag.id).unwrap().unwrap();
    assert_eq!(detail.name, "Filler");
    let ids: Vec<i64> = detail.games.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    assert!(find_tag(&conn, 999).unwrap().is_none());
}

// ── Aggregates ──────────────────────────────────────────────────────────────

#[test]
fn player_bounds_across_games() {
    let conn = open_memory().unwrap();
    assert_eq!(min_players_across_games(&conn).unwrap(), None);
    assert_eq!(max_players_across_games(&conn).unwrap(), None);

    create_game(&conn, &game("Duet", 2, Some(2))).unwrap();
    create_game(&conn, &game("Crowd", 3, Some(10))).unwrap();
    create_game(&conn, &game("Open", 4, None)).unwrap();

    assert_eq!(min_players_across_games(&conn).unwrap(), Some(2));
    assert_eq!(max_players_across_games(&conn).unwrap(), Some(10));
}

#[test]
fn shelf_stats_counts_rows() {
    let conn = open_memory().unwrap();
    let g = create_game(&conn, &game("Counted", 2, None)).unwrap();
    let t = create_tag(&conn, &NewTag { name: "Kept".into() }).unwrap();
    attach_tag(&conn, g.id, t.id).unwrap();

    let stats = shelf_stats(&conn).unwrap();
    assert_eq!(stats.games, 1);
    assert_eq!(stats.tags, 1);
    assert_eq!(stats.associations, 1);
}
