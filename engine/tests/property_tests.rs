use examhub_engine::communication::{CommunicationSession, EmailChannel};
use examhub_engine::config::Config;
use examhub_engine::exam::ExamMode;
use examhub_engine::stakeholders::StakeholderCursor;
use proptest::prelude::*;
use sdk::MemorySink;

proptest! {
    #[test]
    fn test_cursor_yields_items_in_order_then_none(
        items in proptest::collection::vec(any::<u32>(), 0..64),
        extra_calls in 1usize..8,
    ) {
        let mut cursor = StakeholderCursor::new(items.clone());

        let mut yielded = Vec::new();
        for _ in 0..items.len() {
            prop_assert!(cursor.has_next());
            match cursor.next() {
                Some(item) => yielded.push(item),
                None => prop_assert!(false, "cursor exhausted early"),
            }
        }
        prop_assert_eq!(&yielded, &items);

        for _ in 0..extra_calls {
            prop_assert_eq!(cursor.next(), None);
            prop_assert_eq!(cursor.consumed(), items.len());
        }
    }

    #[test]
    fn test_cursor_index_never_exceeds_len(
        len in 0usize..32,
        calls in 0usize..64,
    ) {
        let mut cursor = StakeholderCursor::new(vec![(); len]);
        for _ in 0..calls {
            cursor.next();
            prop_assert!(cursor.consumed() <= len);
            prop_assert_eq!(cursor.consumed() + cursor.remaining(), len);
        }
        prop_assert_eq!(cursor.consumed(), calls.min(len));
    }
}

proptest! {
    #[test]
    fn test_session_always_three_lines(message in "\\PC*") {
        let mut session = CommunicationSession::new(EmailChannel);
        let mut sink = MemorySink::new();
        session.communicate(&message, &mut sink).unwrap();

        let texts = sink.texts();
        prop_assert_eq!(texts.len(), 3);
        prop_assert_eq!(texts[0], "Opening email channel");
        prop_assert_eq!(texts[1], format!("Sending email: {}", message));
        prop_assert_eq!(texts[2], "Closing email channel");
    }
}

proptest! {
    #[test]
    fn test_config_parsing_round_trip(
        log_level in "error|warn|info|debug|trace",
        theme in "[A-Za-z ]{0,20}",
        offline in any::<bool>(),
        stakeholders in 0usize..=100_000,
        sender in "[A-Za-z0-9]{1,12}",
    ) {
        let mut config = Config::default();
        config.core.log_level = log_level;
        config.settings.theme = theme;
        config.exam.mode = if offline { ExamMode::Offline } else { ExamMode::Online };
        config.walkthrough.stakeholders = stakeholders;
        config.walkthrough.sender = sender;

        let toml_string = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&toml_string).unwrap();

        prop_assert_eq!(parsed, config);
    }
}
