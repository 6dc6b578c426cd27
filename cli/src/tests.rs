use super::*;
use glossa_core::IndexBuilder;
use glossa_search::SearchConfig;
use std::sync::mpsc::Receiver;

mod common {
    use super::*;

    pub(super) fn create_session() -> (SearchSession, Sender<Output>, Receiver<Output>) {
        let mut builder = IndexBuilder::new("aliases:");
        builder.add_unit("Dog", "aliases: [\"hound\", \"pup\"]\nA domesticated canine.");
        builder.add_unit("Cat", "A small feline.");
        let (index, _) = builder.finish();

        let (tx, rx) = mpsc::channel();
        let session = SearchSession::new(
            Arc::new(index),
            SearchConfig::default(),
            event_sink(tx.clone()),
        );
        (session, tx, rx)
    }

    pub(super) fn titles(output: &Output) -> Vec<&str> {
        match output {
            Output::Event(SessionEvent::Results(resolved)) | Output::Selected(resolved) => {
                resolved.titles()
            }
            Output::Event(SessionEvent::Cleared) => Vec::new(),
        }
    }
}

mod handle_line {
    use super::common::{create_session, titles};
    use super::*;

    #[test]
    fn test_select_goes_through_output_channel() {
        let (session, tx, rx) = create_session();

        assert!(handle_line(&session, ":select pup", &tx).is_none());

        let output = rx.try_recv().unwrap();
        assert!(matches!(output, Output::Selected(Resolved::Single(_))));
        assert_eq!(titles(&output), vec!["Dog"]);
    }

    #[test]
    fn test_select_unknown_alias_is_no_match() {
        let (session, tx, rx) = create_session();

        handle_line(&session, ":select wolf", &tx);

        assert_eq!(
            rx.try_recv().unwrap(),
            Output::Selected(Resolved::NoMatch)
        );
    }

    #[test]
    fn test_search_then_select_keeps_order() {
        let (session, tx, rx) = create_session();

        let handle = handle_line(&session, "dog", &tx).unwrap();
        assert!(handle.join().unwrap());
        handle_line(&session, ":select Cat", &tx);

        let outputs: Vec<Output> = rx.try_iter().collect();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0], Output::Event(SessionEvent::Results(_))));
        assert_eq!(titles(&outputs[0]), vec!["Dog"]);
        assert!(matches!(outputs[1], Output::Selected(_)));
        assert_eq!(titles(&outputs[1]), vec!["Cat"]);
    }

    #[test]
    fn test_empty_line_clears() {
        let (session, tx, rx) = create_session();

        assert!(handle_line(&session, "", &tx).is_none());

        assert_eq!(
            rx.try_recv().unwrap(),
            Output::Event(SessionEvent::Cleared)
        );
    }

    #[test]
    fn test_select_prefix_without_space_is_a_search() {
        let (session, tx, rx) = create_session();

        let handle = handle_line(&session, ":select", &tx).unwrap();
        handle.join().unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            Output::Event(SessionEvent::Results(_))
        ));
    }
}

mod event_sink {
    use super::*;

    #[test]
    fn test_closed_output_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let sink = event_sink(tx);

        sink(SessionEvent::Cleared);
    }
}
