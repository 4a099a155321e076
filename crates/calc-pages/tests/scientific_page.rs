//! Scientific page behaviour against the scripted calculator.

use calc_pages::mock::CLEARED_DISPLAY;
use calc_pages::prelude::*;
use proptest::prelude::*;

fn init_tracing() {
    let _ = calc_pages::init_tracing(&LoggingConfig::default().with_level("calc_pages=debug"));
}

fn fast_config() -> PageConfig {
    PageConfig::new().with_wait(WaitOptions::new().with_timeout(100).with_poll_interval(5))
}

fn set_display(session: &MockSession, text: &str) {
    session.update(|tree| {
        let _ = tree.set_text(CALCULATOR_RESULTS_ID, text);
    });
}

mod clear_all_tests {
    use super::*;

    #[test]
    fn test_empty_display_uses_clear_button() {
        init_tracing();
        let session = MockSession::calculator(CalculatorMode::Scientific);
        set_display(&session, "");
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        page.clear_all().unwrap();

        assert_eq!(
            session.clicks(),
            [
                "clearButton",
                "clearButton",
                "ClearMemoryButton",
                "HistoryLabel",
                "ClearHistory"
            ]
        );
    }

    #[test]
    fn test_non_empty_display_uses_clear_entry_first() {
        init_tracing();
        let session = MockSession::calculator(CalculatorMode::Scientific);
        set_display(&session, "Display is 123");
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        page.clear_all().unwrap();

        assert_eq!(
            session.clicks(),
            [
                "clearEntryButton",
                "clearButton",
                "ClearMemoryButton",
                "HistoryLabel",
                "ClearHistory"
            ]
        );
        assert_eq!(session.text_of(CALCULATOR_RESULTS_ID).unwrap(), CLEARED_DISPLAY);
        assert!(!session.contains("MemoryListView"));
        assert!(session.contains("HistoryEmpty"));
        assert_eq!(page.result_text().unwrap(), "0");
    }

    #[test]
    fn test_history_already_open_is_not_clicked() {
        let session = MockSession::calculator(CalculatorMode::Scientific)
            .with_selected("HistoryLabel", true);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        page.clear_all().unwrap();

        assert!(!session.clicks().iter().any(|id| id == "HistoryLabel"));
        assert_eq!(session.clicks().last().unwrap(), "ClearHistory");
    }

    #[test]
    fn test_second_clear_tolerates_empty_history() {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());
        page.clear_all().unwrap();
        session.clear_history();

        page.clear_all().unwrap();

        assert_eq!(
            session.clicks(),
            ["clearEntryButton", "clearButton", "ClearMemoryButton"]
        );
    }

    #[test]
    fn test_stops_at_first_failing_step() {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        session.update(|tree| {
            let _ = tree.remove("ClearMemoryButton");
        });
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        let err = page.clear_all().unwrap_err();

        assert!(matches!(
            err,
            PageError::ElementNotFound { ref accessibility_id } if accessibility_id == "ClearMemoryButton"
        ));
        assert_eq!(session.clicks(), ["clearEntryButton", "clearButton"]);
        assert!(!session.was_called("find:HistoryLabel"));
    }

    #[test]
    fn test_missing_display_fails_before_any_click() {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        session.update(|tree| {
            let _ = tree.remove(CALCULATOR_RESULTS_ID);
        });
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        assert!(page.clear_all().unwrap_err().is_element_not_found());
        assert!(session.clicks().is_empty());
    }

    #[test]
    fn test_history_panel_in_unknown_state() {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        session.update(|tree| {
            let _ = tree.remove("ClearHistory");
        });
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        assert!(matches!(
            page.clear_all(),
            Err(PageError::UnexpectedUiState { .. })
        ));
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_navigate_to_every_mode() {
        init_tracing();
        let session = MockSession::calculator(CalculatorMode::Standard);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        for mode in CalculatorMode::ALL {
            page.navigate_to_mode(mode).unwrap();
            assert_eq!(page.current_mode().unwrap(), mode);
            assert!(session.contains(mode.surface_id()));
        }
    }

    #[test]
    fn test_navigation_click_order() {
        let session = MockSession::calculator(CalculatorMode::Standard);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        page.navigate_to_mode(CalculatorMode::Scientific).unwrap();

        assert_eq!(session.clicks(), ["TogglePaneButton", "Scientific"]);
        assert!(page.is_loaded().unwrap());
    }

    #[test]
    fn test_wrong_terminal_mode_is_reported() {
        let session = MockSession::calculator(CalculatorMode::Standard)
            .on_click("Scientific", |tree| tree.show_mode(CalculatorMode::Standard));
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        let err = page.navigate_to_mode(CalculatorMode::Scientific).unwrap_err();

        match err {
            PageError::NavigationFailed { mode, reason } => {
                assert_eq!(mode, CalculatorMode::Scientific);
                assert!(reason.contains("Standard"));
            }
            other => panic!("expected NavigationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_surface_is_reported() {
        let session = MockSession::calculator(CalculatorMode::Standard).on_click(
            "Graphing",
            |tree| {
                tree.show_mode(CalculatorMode::Graphing);
                let _ = tree.remove("GraphingCalculator");
            },
        );
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        let err = page.navigate_to_mode(CalculatorMode::Graphing).unwrap_err();

        assert!(matches!(
            err,
            PageError::NavigationFailed { mode: CalculatorMode::Graphing, .. }
        ));
        assert!(err.to_string().contains("GraphingCalculator"));
    }

    #[test]
    fn test_pane_that_never_opens_times_out() {
        let session =
            MockSession::calculator(CalculatorMode::Standard).on_click("TogglePaneButton", |_| {});
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        let err = page.navigate_to_mode(CalculatorMode::Programmer).unwrap_err();

        assert!(matches!(err, PageError::Timeout { ms: 100, .. }));
        assert!(!session.was_called("click:Programmer"));
    }

    #[test]
    fn test_zero_poll_interval_does_not_spin() {
        let session =
            MockSession::calculator(CalculatorMode::Standard).on_click("TogglePaneButton", |_| {});
        let config =
            PageConfig::new().with_wait(WaitOptions::new().with_timeout(50).with_poll_interval(0));
        let page = ScientificCalculatorPage::with_config(&session, &config);

        let err = page.navigate_to_mode(CalculatorMode::Programmer).unwrap_err();

        assert!(matches!(err, PageError::Timeout { ms: 50, .. }));
        let lookups = session.lookup_count("Programmer");
        assert!(lookups <= 52, "looked up {lookups} times in 50ms");
    }

    #[test]
    fn test_missing_toggle_fails_without_polling() {
        let session = MockSession::calculator(CalculatorMode::Standard);
        session.update(|tree| {
            let _ = tree.remove("TogglePaneButton");
        });
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        assert!(page
            .navigate_to_mode(CalculatorMode::Scientific)
            .unwrap_err()
            .is_element_not_found());
        assert_eq!(session.lookup_count("TogglePaneButton"), 1);
    }
}

mod resolution_tests {
    use super::*;

    #[test]
    fn test_old_reference_goes_stale_after_mode_switch() {
        let session = MockSession::calculator(CalculatorMode::Standard);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());
        let old_header = page.header().unwrap();

        page.navigate_to_mode(CalculatorMode::Scientific).unwrap();

        assert!(matches!(
            old_header.text(),
            Err(PageError::StaleElement { .. })
        ));
        assert_eq!(page.header().unwrap().text().unwrap(), "Scientific");
    }

    #[test]
    fn test_page_survives_round_trip_through_converter() {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        page.navigate_to_mode(CalculatorMode::Currency).unwrap();
        assert!(page.calculator_result().unwrap_err().is_element_not_found());

        page.navigate_to_mode(CalculatorMode::Scientific).unwrap();
        page.clear_all().unwrap();
    }

    #[test]
    fn test_every_accessor_reports_absent_ids() {
        let session = MockSession::new();
        let page = ScientificCalculatorPage::new(&session);

        assert!(page.header().unwrap_err().is_element_not_found());
        assert!(page.calculator_result().unwrap_err().is_element_not_found());
        assert!(page.operators().clear_button().unwrap_err().is_element_not_found());
        assert!(page
            .operators()
            .clear_entry_button()
            .unwrap_err()
            .is_element_not_found());
        assert!(page.memory().memory_clear().unwrap_err().is_element_not_found());
        assert!(page
            .history()
            .clear_history_button()
            .unwrap_err()
            .is_element_not_found());
        assert!(page
            .navigation()
            .toggle_button()
            .unwrap_err()
            .is_element_not_found());
    }

    #[test]
    fn test_yaml_config_reaches_the_page() {
        let config = PageConfig::from_yaml_str(
            "narration_prefixes: [\"Expression is\", \"Display is\"]\nwait:\n  timeout_ms: 100\n  poll_interval_ms: 5\n",
        )
        .unwrap();
        let session = MockSession::calculator(CalculatorMode::Scientific);
        set_display(&session, "Expression is 6 × 7 =");
        let page = ScientificCalculatorPage::with_config(&session, &config);

        assert_eq!(page.result_text().unwrap(), "6 × 7 =");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_navigation_sequences_end_in_last_mode(
        modes in prop::collection::vec(prop::sample::select(CalculatorMode::ALL.to_vec()), 1..8)
    ) {
        let session = MockSession::calculator(CalculatorMode::Standard);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        for mode in &modes {
            prop_assert!(page.navigate_to_mode(*mode).is_ok());
        }
        let last = *modes.last().unwrap();
        prop_assert_eq!(page.current_mode().unwrap(), last);
    }

    #[test]
    fn prop_result_text_matches_rendered_number(value in "-?[0-9]{1,12}(\\.[0-9]{1,6})?") {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        set_display(&session, &format!("Display is {value}"));
        let page = ScientificCalculatorPage::new(&session);

        let shown = page.result_text().unwrap();
        prop_assert_eq!(&shown, &value);
        prop_assert_eq!(page.result_text().unwrap(), shown);
    }

    #[test]
    fn prop_clear_all_always_ends_cleared(value in "[0-9]{0,8}") {
        let session = MockSession::calculator(CalculatorMode::Scientific);
        set_display(&session, &value);
        let page = ScientificCalculatorPage::with_config(&session, &fast_config());

        prop_assert!(page.clear_all().is_ok());
        let first = if value.is_empty() { "clearButton" } else { "clearEntryButton" };
        let clicks = session.clicks();
        prop_assert_eq!(clicks[0].as_str(), first);
        prop_assert_eq!(session.text_of(CALCULATOR_RESULTS_ID).unwrap(), CLEARED_DISPLAY);
    }
}
