mod search_sequence;
mod table_state;
