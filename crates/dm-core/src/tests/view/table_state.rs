use crate::TableState;

#[test]
fn test_loading_wins_over_everything() {
    assert_eq!(TableState::derive(true, 0, 0), TableState::Loading);
    assert_eq!(TableState::derive(true, 5, 0), TableState::Loading);
    assert_eq!(TableState::derive(true, 5, 3), TableState::Loading);
}

#[test]
fn test_short_input_shows_instruction() {
    assert_eq!(TableState::derive(false, 0, 0), TableState::Instruction);
    assert_eq!(TableState::derive(false, 2, 0), TableState::Instruction);
}

#[test]
fn test_valid_input_without_rows_shows_empty() {
    assert_eq!(TableState::derive(false, 3, 0), TableState::Empty);
    assert_eq!(TableState::derive(false, 10, 0), TableState::Empty);
}

#[test]
fn test_rows_show_populated() {
    assert_eq!(TableState::derive(false, 5, 1), TableState::Populated);
    // Stale rows from a previous search stay visible while typing
    assert_eq!(TableState::derive(false, 1, 2), TableState::Populated);
}

#[test]
fn test_exactly_one_state_for_every_input() {
    // The display conditions from the UI contract, checked independently
    // of the derivation order so an overlap would be caught.
    for is_loading in [false, true] {
        for search_len in 0..8 {
            for row_count in 0..4 {
                let state = TableState::derive(is_loading, search_len, row_count);

                let loading = is_loading;
                let instruction = !is_loading && row_count == 0 && search_len < 3;
                let empty = !is_loading && row_count == 0 && search_len >= 3;
                let populated = !is_loading && row_count > 0;

                assert_eq!(
                    [loading, instruction, empty, populated]
                        .iter()
                        .filter(|c| **c)
                        .count(),
                    1,
                    "conditions overlap for ({is_loading}, {search_len}, {row_count})"
                );

                let expected = if loading {
                    TableState::Loading
                } else if instruction {
                    TableState::Instruction
                } else if empty {
                    TableState::Empty
                } else {
                    TableState::Populated
                };
                assert_eq!(state, expected);
            }
        }
    }
}

#[test]
fn test_messages() {
    assert_eq!(
        TableState::Instruction.message(),
        Some("Please enter at least 3 characters to search")
    );
    assert_eq!(TableState::Empty.message(), Some("No users found"));
    assert_eq!(TableState::Loading.message(), None);
    assert_eq!(TableState::Populated.message(), None);
}
