use proptest::prelude::*;
use tracker_shared::{Minutes, TaskId, TaskStore};

fn populated(texts: &[String]) -> (TaskStore, Vec<TaskId>) {
    let mut store = TaskStore::new();
    let ids = texts
        .iter()
        .map(|text| store.add(text, Some(Minutes(1))).unwrap().id)
        .collect();
    (store, ids)
}

fn visible_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}[a-zA-Z0-9][a-zA-Z0-9 ]{0,12}"
}

proptest! {
    #[test]
    fn add_grows_store_by_one(
        texts in prop::collection::vec(visible_text(), 0..8),
        text in visible_text(),
        minutes in any::<u32>(),
    ) {
        let (mut store, _) = populated(&texts);
        let before = store.len();
        let task = store.add(&text, Some(Minutes(minutes))).unwrap().clone();
        prop_assert_eq!(store.len(), before + 1);
        prop_assert!(!task.completed);
        prop_assert_eq!(store.tasks().last().unwrap(), &task);
    }

    #[test]
    fn blank_text_or_missing_duration_is_ignored(
        texts in prop::collection::vec(visible_text(), 0..8),
        blank in "[ \t\n]{0,6}",
        text in visible_text(),
    ) {
        let (mut store, _) = populated(&texts);
        let before = store.tasks().to_vec();
        prop_assert!(store.add(&blank, Some(Minutes(5))).is_none());
        prop_assert!(store.add(&text, None).is_none());
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn toggle_twice_restores_flag(
        texts in prop::collection::vec(visible_text(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut store, ids) = populated(&texts);
        let id = ids[pick.index(ids.len())];
        let before = store.tasks().to_vec();
        store.toggle_complete(id);
        prop_assert_ne!(store.tasks(), before.as_slice());
        store.toggle_complete(id);
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn delete_preserves_relative_order(
        texts in prop::collection::vec(visible_text(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut store, mut ids) = populated(&texts);
        let victim = ids.remove(pick.index(ids.len()));
        prop_assert!(store.delete(victim).is_some());
        let remaining: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(remaining, ids);
    }

    #[test]
    fn update_duration_touches_only_target(
        texts in prop::collection::vec(visible_text(), 1..8),
        pick in any::<prop::sample::Index>(),
        minutes in any::<u32>(),
    ) {
        let (mut store, ids) = populated(&texts);
        let id = ids[pick.index(ids.len())];
        let before = store.tasks().to_vec();
        prop_assert!(store.update_duration(id, Minutes(minutes)));

        for (old, new) in before.iter().zip(store.tasks()) {
            prop_assert_eq!(old.id, new.id);
            prop_assert_eq!(&old.text, &new.text);
            prop_assert_eq!(old.completed, new.completed);
            if old.id == id {
                prop_assert_eq!(new.duration, Minutes(minutes));
            } else {
                prop_assert_eq!(old.duration, new.duration);
            }
        }
    }

    #[test]
    fn ids_are_unique(texts in prop::collection::vec(visible_text(), 0..32)) {
        let (_, ids) = populated(&texts);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}
