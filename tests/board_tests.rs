mod common;

use common::EventRecorder;
use taskboard::domain::{BoardError, BoardEvent, BoardEventKind, StageSet};
use taskboard::observable::Event;
use taskboard::{Board, DEFAULT_CARD_TEXT};

fn standard_board() -> Board {
    Board::new(StageSet::standard())
}

#[test]
fn create_assigns_increasing_ids_from_one() {
    let mut board = standard_board();
    for expected in 1..=5 {
        let card = board.create_card();
        assert_eq!(card.id, expected);
    }
    assert_eq!(board.card_count(), 5);
}

#[test]
fn create_places_card_in_first_stage_with_default_text() {
    let mut board = standard_board();
    let card = board.create_card();
    assert_eq!(card.text, DEFAULT_CARD_TEXT);
    assert_eq!(card.stage, "open");
    assert_eq!(board.card(card.id), Some(&card));
}

#[test]
fn create_publishes_exactly_one_event_with_the_new_card() {
    let mut board = standard_board();
    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    let card = board.create_card();

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], BoardEvent::CardCreated { card });
}

#[test]
fn configured_default_text_is_applied() {
    let mut board = Board::with_default_text(StageSet::standard(), "Untriaged");
    assert_eq!(board.create_card().text, "Untriaged");
}

#[test]
fn update_replaces_text_and_publishes_once() {
    let mut board = standard_board();
    let id = board.create_card().id;

    let recorder = EventRecorder::new();
    recorder.attach(&mut board, BoardEventKind::CardUpdated);

    let updated = board.update_card_text(id, "Write report").unwrap();
    assert_eq!(updated.text, "Write report");
    assert_eq!(board.card(id).unwrap().text, "Write report");

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card().text, "Write report");
}

#[test]
fn update_of_unknown_id_is_a_silent_no_op() {
    let mut board = standard_board();
    board.create_card();

    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    assert_eq!(
        board.update_card_text(99, "x"),
        Err(BoardError::NotFound(99))
    );
    assert!(recorder.is_empty());
    assert_eq!(board.card(1).unwrap().text, DEFAULT_CARD_TEXT);
}

#[test]
fn move_right_advances_to_the_adjacent_stage() {
    let mut board = standard_board();
    let id = board.create_card().id;

    let recorder = EventRecorder::new();
    recorder.attach(&mut board, BoardEventKind::CardMoved);

    let moved = board.move_card_right(id).unwrap();
    assert_eq!(moved.stage, "processing");
    assert_eq!(recorder.len(), 1);
}

#[test]
fn move_left_returns_to_the_previous_stage() {
    let mut board = standard_board();
    let id = board.create_card().id;
    board.move_card_right(id).unwrap();

    let moved = board.move_card_left(id).unwrap();
    assert_eq!(moved.stage, "open");
}

#[test]
fn move_left_in_first_stage_changes_nothing() {
    let mut board = standard_board();
    let id = board.create_card().id;

    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    assert_eq!(
        board.move_card_left(id),
        Err(BoardError::AtBoundary {
            id,
            stage: "open".into()
        })
    );
    assert_eq!(board.card(id).unwrap().stage, "open");
    assert!(recorder.is_empty());
}

#[test]
fn move_right_in_last_stage_changes_nothing() {
    let mut board = standard_board();
    let id = board.create_card().id;
    board.move_card_right(id).unwrap();
    board.move_card_right(id).unwrap();

    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    assert_eq!(
        board.move_card_right(id),
        Err(BoardError::AtBoundary {
            id,
            stage: "closed".into()
        })
    );
    assert_eq!(board.card(id).unwrap().stage, "closed");
    assert!(recorder.is_empty());
}

#[test]
fn move_of_unknown_id_is_a_silent_no_op() {
    let mut board = standard_board();

    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    assert_eq!(board.move_card_right(7), Err(BoardError::NotFound(7)));
    assert!(recorder.is_empty());
}

#[test]
fn event_payloads_are_snapshots_not_live_views() {
    let mut board = standard_board();
    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    let id = board.create_card().id;
    board.update_card_text(id, "changed later").unwrap();

    // The creation event still shows the card as it was at creation time.
    let events = recorder.events();
    assert_eq!(events[0].card().text, DEFAULT_CARD_TEXT);
    assert_eq!(events[1].card().text, "changed later");
}

#[test]
fn card_identity_is_the_id_alone() {
    let mut board = standard_board();
    let before = board.create_card();
    let after = board.update_card_text(before.id, "renamed").unwrap();
    assert_eq!(before, after);
}

#[test]
fn cards_in_stage_lists_members_by_id() {
    let mut board = standard_board();
    let a = board.create_card().id;
    let b = board.create_card().id;
    let c = board.create_card().id;
    board.move_card_right(b).unwrap();

    let open: Vec<u64> = board.cards_in_stage("open").iter().map(|c| c.id).collect();
    assert_eq!(open, [a, c]);
    let processing: Vec<u64> = board
        .cards_in_stage("processing")
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(processing, [b]);
}

#[test]
fn events_serialize_to_the_published_wire_shape() {
    let mut board = standard_board();
    let card = board.create_card();

    let json = serde_json::to_value(BoardEvent::CardCreated { card }).unwrap();
    assert_eq!(json["type"], "cardCreated");
    assert_eq!(json["card"]["id"], 1);
    assert_eq!(json["card"]["text"], DEFAULT_CARD_TEXT);
    assert_eq!(json["card"]["stage"], "open");
}

#[test]
fn custom_stage_sequence_is_honored() {
    let stages = StageSet::new(["triage", "build", "verify", "ship"]).unwrap();
    let mut board = Board::new(stages);
    let id = board.create_card().id;
    assert_eq!(board.card(id).unwrap().stage, "triage");

    board.move_card_right(id).unwrap();
    board.move_card_right(id).unwrap();
    let shipped = board.move_card_right(id).unwrap();
    assert_eq!(shipped.stage, "ship");
    assert!(board.move_card_right(id).is_err());
}

#[test]
fn full_session_walkthrough() {
    let mut board = standard_board();
    let recorder = EventRecorder::new();
    recorder.attach_all(&mut board);

    let card = board.create_card();
    assert_eq!((card.id, card.text.as_str(), card.stage.as_str()), (1, "New Task", "open"));

    assert_eq!(board.move_card_right(1).unwrap().stage, "processing");
    assert_eq!(board.move_card_right(1).unwrap().stage, "closed");

    // A third move right is rejected at the end of the sequence.
    assert!(board.move_card_right(1).is_err());
    assert_eq!(board.card(1).unwrap().stage, "closed");

    board.update_card_text(1, "Write report").unwrap();
    assert_eq!(board.card(1).unwrap().text, "Write report");

    assert!(board.update_card_text(99, "x").is_err());
    assert!(board.card(99).is_none());

    let kinds: Vec<BoardEventKind> = recorder.events().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        [
            BoardEventKind::CardCreated,
            BoardEventKind::CardMoved,
            BoardEventKind::CardMoved,
            BoardEventKind::CardUpdated,
        ]
    );
}
