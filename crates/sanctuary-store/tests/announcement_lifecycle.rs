//! Mutation behaviour of the mock store, driven through the repository traits.

use std::sync::Arc;

use proptest::prelude::*;
use sanctuary_core::repository::{ReadRepository, WriteRepository};
use sanctuary_core::types::{
    Announcement, AnnouncementCategory, AnnouncementDraft, PrayerRequest, PrayerRequestDraft,
};
use sanctuary_store::MockStore;
use sanctuary_testkit::FixedClock;

fn seeded() -> (MockStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at_date(2026, 10, 19));
    (MockStore::seeded(clock.clone()), clock)
}

fn ids(items: &[Announcement]) -> Vec<&str> {
    items.iter().map(|a| a.id.as_str()).collect()
}

#[tokio::test]
async fn create_then_delete_seeded_announcement() {
    let (store, clock) = seeded();
    let seeded = ReadRepository::<Announcement>::list(&store).await.unwrap();
    assert_eq!(ids(&seeded), ["a1", "a2"]);

    let draft = AnnouncementDraft::new("Test", "Body", AnnouncementCategory::General);
    let created = WriteRepository::<Announcement>::create(&store, draft)
        .await
        .unwrap();

    let after_create = ReadRepository::<Announcement>::list(&store).await.unwrap();
    assert_eq!(after_create.len(), 3);
    assert_eq!(after_create[0].id, format!("a_{}", clock.now().ts_ms));
    assert_eq!(after_create[0].date, clock.now().date());
    assert_eq!(after_create[0].category, AnnouncementCategory::General);
    assert_eq!(after_create[1..], seeded[..]);

    assert!(WriteRepository::<Announcement>::delete(&store, "a1")
        .await
        .unwrap());
    let after_delete = ReadRepository::<Announcement>::list(&store).await.unwrap();
    assert_eq!(ids(&after_delete), [created.id.as_str(), "a2"]);
    assert_eq!(after_delete[1], seeded[1]);
}

#[tokio::test]
async fn concurrent_creates_are_both_applied() {
    let (store, _) = seeded();
    let first = PrayerRequestDraft {
        requester: "Abena Osei".into(),
        request: "Healing".into(),
        ..Default::default()
    };
    let second = PrayerRequestDraft {
        requester: "Kojo Antwi".into(),
        request: "Guidance".into(),
        ..Default::default()
    };

    let (a, b) = futures::join!(
        WriteRepository::<PrayerRequest>::create(&store, first),
        WriteRepository::<PrayerRequest>::create(&store, second),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.id, b.id);
    let all = ReadRepository::<PrayerRequest>::list(&store).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.iter().any(|r| r.id == a.id));
    assert!(all.iter().any(|r| r.id == b.id));
}

#[tokio::test]
async fn separate_stores_share_nothing() {
    let (first, _) = seeded();
    let (second, _) = seeded();

    WriteRepository::<Announcement>::delete(&first, "a2")
        .await
        .unwrap();

    assert_eq!(
        ReadRepository::<Announcement>::list(&first).await.unwrap().len(),
        1
    );
    assert_eq!(
        ReadRepository::<Announcement>::list(&second).await.unwrap().len(),
        2
    );
}

proptest! {
    #[test]
    fn creates_prepend_with_unique_ids(titles in prop::collection::vec("[a-z]{1,12}", 1..12)) {
        futures::executor::block_on(async {
            let (store, _) = seeded();
            let mut created = Vec::new();
            for title in &titles {
                let draft = AnnouncementDraft::new(title.clone(), "Body", AnnouncementCategory::Video);
                created.push(WriteRepository::<Announcement>::create(&store, draft).await.unwrap());
            }

            let all = ReadRepository::<Announcement>::list(&store).await.unwrap();
            prop_assert_eq!(all.len(), titles.len() + 2);

            let mut unique: Vec<&str> = ids(&all);
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), all.len());

            created.reverse();
            prop_assert_eq!(&all[..created.len()], &created[..]);
            Ok(())
        })?;
    }

    #[test]
    fn deleting_one_id_leaves_others(victim in 0usize..2, unknown in "[x-z]{3}") {
        futures::executor::block_on(async {
            let (store, _) = seeded();
            let before = ReadRepository::<Announcement>::list(&store).await.unwrap();

            let removed = WriteRepository::<Announcement>::delete(&store, &unknown).await.unwrap();
            prop_assert!(!removed);

            let target = before[victim].id.clone();
            WriteRepository::<Announcement>::delete(&store, &target).await.unwrap();
            let after = ReadRepository::<Announcement>::list(&store).await.unwrap();

            let expected: Vec<Announcement> =
                before.into_iter().filter(|a| a.id != target).collect();
            prop_assert_eq!(after, expected);
            Ok(())
        })?;
    }
}
