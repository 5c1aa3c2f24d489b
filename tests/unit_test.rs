// Unit tests for bus-roster
// These exercise the public API only: reducer, search, operation boundary and keymap.

#[cfg(test)]
mod reducer_tests {
    use bus_roster::app::state::{Action, RosterState, reduce};
    use bus_roster::error::Operation;
    use bus_roster::model::{Bus, BusDraft, BusType};

    fn mk_bus(id: i64, number: &str, bus_type: BusType, capacity: u32) -> Bus {
        Bus::new(
            id,
            BusDraft {
                bus_number: number.to_string(),
                bus_type,
                capacity,
                last_maintenance: "2024-01-01".to_string(),
                next_maintenance: "2024-06-01".to_string(),
            },
        )
    }

    fn seeded() -> RosterState {
        reduce(
            RosterState::default(),
            Action::Loaded(vec![
                mk_bus(1, "KA-01", BusType::Express, 40),
                mk_bus(2, "MH-12", BusType::Sleeper, 30),
                mk_bus(3, "DL-03", BusType::Deluxe, 45),
            ]),
        )
    }

    #[test]
    fn empty_load_has_no_rows_and_no_error() {
        let s = reduce(RosterState::default(), Action::LoadStarted);
        let s = reduce(s, Action::Loaded(vec![]));
        assert!(s.visible().is_empty());
        assert!(s.error.is_none());
        assert!(!s.loading);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let s = reduce(seeded(), Action::LoadStarted);
        let s = reduce(s, Action::LoadFailed);
        assert_eq!(s.buses.len(), 3);
        let err = s.error.expect("error set");
        assert_eq!(err.operation, Operation::Fetch);
        assert_eq!(err.message, "Failed to fetch buses. Please try again later.");
        assert!(err.replaces_view());
    }

    #[test]
    fn created_bus_is_appended_and_form_reset() {
        let mut s = reduce(seeded(), Action::OpenCreate);
        s.draft.bus_number = "KL-07".into();
        s.draft.capacity = 52;
        let s = reduce(s, Action::Created(mk_bus(4, "KL-07", BusType::Express, 52)));
        assert_eq!(s.buses.last().map(|b| b.id), Some(4));
        assert_eq!(s.buses.len(), 4);
        assert!(!s.add_dialog_open);
        assert_eq!(s.draft, BusDraft::default());
    }

    #[test]
    fn update_replaces_only_matching_entry() {
        let s = reduce(seeded(), Action::OpenEdit(mk_bus(2, "MH-12", BusType::Sleeper, 30)));
        let updated = mk_bus(2, "MH-12-NEW", BusType::Deluxe, 36);
        let s = reduce(s, Action::Updated(updated.clone()));
        assert_eq!(s.find(2), Some(&updated));
        assert_eq!(s.find(1).map(|b| b.info.bus_number.as_str()), Some("KA-01"));
        assert_eq!(s.find(3).map(|b| b.info.bus_number.as_str()), Some("DL-03"));
        assert!(!s.edit_dialog_open);
        assert!(s.editing.is_none());
    }

    #[test]
    fn update_is_idempotent() {
        let updated = mk_bus(3, "DL-03", BusType::Sleeper, 20);
        let once = reduce(seeded(), Action::Updated(updated.clone()));
        let twice = reduce(once.clone(), Action::Updated(updated));
        assert_eq!(once, twice);
    }

    #[test]
    fn failed_update_preserves_edit_copy() {
        let editing = mk_bus(1, "KA-01-changed", BusType::Express, 40);
        let s = reduce(seeded(), Action::OpenEdit(editing.clone()));
        let s = reduce(s, Action::UpdateFailed);
        assert!(s.edit_dialog_open);
        assert_eq!(s.editing, Some(editing));
        assert_eq!(s.find(1).map(|b| b.info.bus_number.as_str()), Some("KA-01"));
        assert_eq!(s.error.map(|e| e.message), Some("Failed to update bus. Please try again.".to_string()));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let s = reduce(seeded(), Action::Deleted(2));
        assert_eq!(s.buses.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn failed_delete_leaves_list_alone() {
        let before = seeded();
        let s = reduce(before.clone(), Action::DeleteFailed);
        assert_eq!(s.buses, before.buses);
        assert_eq!(s.error.map(|e| e.operation), Some(Operation::Delete));
    }

    #[test]
    fn dismiss_clears_error_only() {
        let s = reduce(seeded(), Action::CreateFailed);
        let s = reduce(s, Action::DismissError);
        assert!(s.error.is_none());
        assert_eq!(s.buses.len(), 3);
    }
}

#[cfg(test)]
mod search_tests {
    use bus_roster::model::{Bus, BusDraft, BusType};
    use bus_roster::search::filter_buses;

    fn fleet() -> Vec<Bus> {
        let rows = [
            ("KA-01-F-1234", BusType::Express),
            ("ka-02-xp", BusType::Sleeper),
            ("MH-12-9000", BusType::Deluxe),
            ("TN-SLEEP-1", BusType::Express),
            ("", BusType::Sleeper),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, (n, t))| Bus::new(i as i64 + 1, BusDraft { bus_number: n.to_string(), bus_type: *t, ..BusDraft::default() }))
            .collect()
    }

    #[test]
    fn filter_equals_case_insensitive_subset() {
        let buses = fleet();
        let terms = ["", "k", "KA", "ka-0", "xp", "EXP", "sleep", "lux", "9000", "zz", " ", "-"];
        for term in terms {
            let got: Vec<i64> = filter_buses(&buses, term).iter().map(|b| b.id).collect();
            let t = term.to_lowercase();
            let expected: Vec<i64> = buses
                .iter()
                .filter(|b| {
                    b.info.bus_number.to_lowercase().contains(&t)
                        || b.info.bus_type.as_str().to_lowercase().contains(&t)
                })
                .map(|b| b.id)
                .collect();
            assert_eq!(got, expected, "term {term:?}");
        }
    }

    #[test]
    fn filter_is_idempotent_and_non_mutating() {
        let buses = fleet();
        let snapshot = buses.clone();
        let a: Vec<i64> = filter_buses(&buses, "Sleep").iter().map(|b| b.id).collect();
        let b: Vec<i64> = filter_buses(&buses, "Sleep").iter().map(|b| b.id).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![2, 4, 5]);
        assert_eq!(buses, snapshot);
    }
}

#[cfg(test)]
mod ops_tests {
    use async_trait::async_trait;
    use bus_roster::api::BusApi;
    use bus_roster::app::ops::{Request, perform};
    use bus_roster::app::state::Action;
    use bus_roster::error::{ApiError, Result};
    use bus_roster::model::{Bus, BusDraft, BusId};
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// In-memory stand-in for the backend; `fail` turns every call into a 500.
    #[derive(Default)]
    struct FakeApi {
        buses: Mutex<Vec<Bus>>,
        fail: bool,
    }

    impl FakeApi {
        fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn check(&self) -> Result<()> {
            if self.fail { Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)) } else { Ok(()) }
        }
    }

    #[async_trait]
    impl BusApi for FakeApi {
        async fn list(&self) -> Result<Vec<Bus>> {
            self.check()?;
            Ok(self.buses.lock().unwrap().clone())
        }

        async fn create(&self, draft: &BusDraft) -> Result<Bus> {
            self.check()?;
            let mut buses = self.buses.lock().unwrap();
            let bus = Bus::new(buses.len() as i64 + 1, draft.clone());
            buses.push(bus.clone());
            Ok(bus)
        }

        async fn update(&self, bus: &Bus) -> Result<Bus> {
            self.check()?;
            Ok(bus.clone())
        }

        async fn delete(&self, id: BusId) -> Result<()> {
            self.check()?;
            self.buses.lock().unwrap().retain(|b| b.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_calls_become_success_actions() {
        let api = FakeApi::default();
        let draft = BusDraft { bus_number: "B1".into(), ..BusDraft::default() };
        let created = perform(&api, Request::Create(draft.clone())).await;
        assert_eq!(created, Action::Created(Bus::new(1, draft.clone())));
        assert_eq!(perform(&api, Request::Load).await, Action::Loaded(vec![Bus::new(1, draft)]));
        assert_eq!(perform(&api, Request::Delete(1)).await, Action::Deleted(1));
    }

    #[tokio::test]
    async fn failures_collapse_to_flat_actions() {
        let api = FakeApi::failing();
        assert_eq!(perform(&api, Request::Load).await, Action::LoadFailed);
        assert_eq!(perform(&api, Request::Create(BusDraft::default())).await, Action::CreateFailed);
        assert_eq!(perform(&api, Request::Update(Bus::new(1, BusDraft::default()))).await, Action::UpdateFailed);
        assert_eq!(perform(&api, Request::Delete(99)).await, Action::DeleteFailed);
    }
}

#[cfg(test)]
mod keymap_tests {
    use bus_roster::app::keymap::{KeyAction, Keymap};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn keymap_file_overrides_defaults() {
        let mut path = std::env::temp_dir();
        let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        path.push(format!("bus_roster_keys_{}_{}.conf", std::process::id(), nonce));
        std::fs::write(&path, "# custom\nReload = F\nQuit = Ctrl+q\nbogus line\nNewBus = TooLong\n").unwrap();

        let km = Keymap::from_file(&path).expect("readable");
        let ev = |code, mods| KeyEvent::new(code, mods);
        assert_eq!(km.resolve(&ev(KeyCode::Char('F'), KeyModifiers::NONE)), Some(KeyAction::Reload));
        assert_eq!(km.resolve(&ev(KeyCode::Char('q'), KeyModifiers::CONTROL)), Some(KeyAction::Quit));
        // defaults survive
        assert_eq!(km.resolve(&ev(KeyCode::Char('n'), KeyModifiers::NONE)), Some(KeyAction::NewBus));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn written_keymap_reads_back() {
        let mut path = std::env::temp_dir();
        let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        path.push(format!("bus_roster_keys_rt_{}_{}.conf", std::process::id(), nonce));
        let km = Keymap::default();
        km.write_file(&path).unwrap();
        let back = Keymap::from_file(&path).unwrap();
        let mut a = km.all_bindings();
        let mut b = back.all_bindings();
        a.sort_by_key(|(k, _)| format!("{k:?}"));
        b.sort_by_key(|(k, _)| format!("{k:?}"));
        assert_eq!(a, b);
        let _ = std::fs::remove_file(&path);
    }
}
