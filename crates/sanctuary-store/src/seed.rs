//! # Seed Data
//!
//! Static records every new [`MockStore`](crate::MockStore) starts from.
//! Each call builds a fresh [`Snapshot`], so mutations never leak between
//! stores.

use chrono::NaiveDate;
use sanctuary_core::types::{
    Announcement, AnnouncementCategory, AttendanceRecord, ChurchBranch, Devotion, Event, Hymn,
    HymnCollection, LiturgicalColor, LiturgicalSeason, Member, MemberStatus, MinisterMessage,
    Organization, PrayerRequest, PrayerStatus, Sermon, SickReport, SundayService, User,
};
use sanctuary_core::Role;

use crate::snapshot::Snapshot;

/// The signed-in demo user.
pub const DEMO_USER_ID: &str = "u1";

/// Class assigned when the demo user becomes a member or class leader.
pub const DEMO_CLASS_ID: &str = "cls_bethel";

/// Display name of [`DEMO_CLASS_ID`].
pub const DEMO_CLASS_NAME: &str = "Bethel Class";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a fresh copy of the seed collections.
pub fn seed_snapshot() -> Snapshot {
    Snapshot {
        current_user_id: DEMO_USER_ID.to_string(),
        users: users(),
        members: members(),
        announcements: announcements(),
        events: events(),
        services: services(),
        devotions: devotions(),
        sermons: sermons(),
        hymns: hymns(),
        seasons: seasons(),
        prayer_requests: prayer_requests(),
        sick_reports: sick_reports(),
        minister_messages: minister_messages(),
        attendance: attendance(),
        branches: branches(),
        organizations: organizations(),
    }
}

fn user(id: &str, name: &str, role: Role, class: Option<(&str, &str)>, email: &str) -> User {
    User {
        id: id.into(),
        name: name.into(),
        role,
        class_id: class.map(|(id, _)| id.to_string()),
        class_name: class.map(|(_, name)| name.to_string()),
        email: email.into(),
        phone_number: None,
    }
}

fn users() -> Vec<User> {
    let bethel = Some((DEMO_CLASS_ID, DEMO_CLASS_NAME));
    let mut ama = user("u1", "Ama Mensah", Role::Member, bethel, "ama.mensah@example.org");
    ama.phone_number = Some("+233244000101".into());
    vec![
        ama,
        user(
            "u2",
            "Kwame Asante",
            Role::ClassLeader,
            Some(("cls_ebenezer", "Ebenezer Class")),
            "kwame.asante@example.org",
        ),
        user("u3", "Efua Owusu", Role::SocietySteward, None, "efua.owusu@example.org"),
        user("u4", "Rev. Samuel Boateng", Role::RevMinister, None, "rev.boateng@example.org"),
        user("u5", "Kofi Adjei", Role::Admin, None, "kofi.adjei@example.org"),
    ]
}

fn member(id: &str, name: &str, class_id: &str, number: &str, phone: &str) -> Member {
    Member {
        id: id.into(),
        full_name: name.into(),
        class_id: class_id.into(),
        class_number: number.into(),
        phone: phone.into(),
        status: MemberStatus::Active,
    }
}

fn members() -> Vec<Member> {
    let mut lapsed = member("m4", "Yaw Darko", DEMO_CLASS_ID, "B-004", "+233244000104");
    lapsed.status = MemberStatus::Inactive;
    vec![
        member("m1", "Ama Mensah", DEMO_CLASS_ID, "B-001", "+233244000101"),
        member("m2", "Abena Osei", DEMO_CLASS_ID, "B-002", "+233244000102"),
        member("m3", "Kojo Antwi", DEMO_CLASS_ID, "B-003", "+233244000103"),
        lapsed,
        member("m5", "Akosua Frimpong", "cls_ebenezer", "E-001", "+233244000201"),
        member("m6", "Kwesi Appiah", "cls_ebenezer", "E-002", "+233244000202"),
        member("m7", "Esi Quaye", "cls_ebenezer", "E-003", "+233244000203"),
        member("m8", "Nana Agyeman", "cls_ebenezer", "E-004", "+233244000204"),
    ]
}

fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "a1".into(),
            title: "Harvest Thanksgiving".into(),
            category: AnnouncementCategory::General,
            content: "Our annual harvest thanksgiving service is on Sunday 8th November. \
                      Bring your offerings to the chapel by Saturday evening."
                .into(),
            date: date(2026, 10, 12),
            is_featured: true,
            media_url: None,
            image_url: None,
        },
        Announcement {
            id: "a2".into(),
            title: "Choir Anniversary Recording".into(),
            category: AnnouncementCategory::Audio,
            content: "Listen to the Singing Band's anniversary anthem.".into(),
            date: date(2026, 10, 5),
            is_featured: false,
            media_url: Some("https://media.example.org/choir-anniversary.mp3".into()),
            image_url: None,
        },
    ]
}

fn event(id: &str, title: &str, on: NaiveDate, time: &str, location: &str, about: &str) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        date: on,
        time: time.into(),
        location: location.into(),
        description: about.into(),
        image_url: None,
    }
}

fn events() -> Vec<Event> {
    vec![
        event(
            "e1",
            "Youth Fellowship Rally",
            date(2026, 10, 24),
            "3:00 PM",
            "Church Hall",
            "Circuit-wide youth rally with praise and testimonies.",
        ),
        event(
            "e2",
            "Harvest Thanksgiving",
            date(2026, 11, 8),
            "9:00 AM",
            "Main Sanctuary",
            "Annual harvest service and bazaar.",
        ),
        event(
            "e3",
            "Women's Fellowship Retreat",
            date(2026, 11, 21),
            "8:00 AM",
            "Aburi Retreat Centre",
            "A day of prayer, teaching and fellowship.",
        ),
        event(
            "e4",
            "Men's Fellowship Breakfast",
            date(2026, 9, 26),
            "7:30 AM",
            "Church Hall",
            "Monthly breakfast meeting.",
        ),
    ]
}

fn services() -> Vec<SundayService> {
    vec![
        SundayService {
            id: "svc1".into(),
            date: date(2026, 10, 25),
            theme: "Faithful Stewards".into(),
            preacher: "Rev. Samuel Boateng".into(),
            liturgist: "Efua Owusu".into(),
            readings: strings(&["Luke 16:1-13", "1 Corinthians 4:1-5"]),
            hymns: vec![1, 432, 7],
            notes: Some("Harvest pledges announced".into()),
        },
        SundayService {
            id: "svc2".into(),
            date: date(2026, 10, 18),
            theme: "Walking in the Light".into(),
            preacher: "Rev. Samuel Boateng".into(),
            liturgist: "Kwame Asante".into(),
            readings: strings(&["1 John 1:5-10", "Psalm 27"]),
            hymns: vec![431, 2],
            notes: None,
        },
        SundayService {
            id: "svc3".into(),
            date: date(2026, 10, 11),
            theme: "The Good Shepherd".into(),
            preacher: "Very Rev. Grace Ofori".into(),
            liturgist: "Efua Owusu".into(),
            readings: strings(&["John 10:1-18", "Psalm 23"]),
            hymns: vec![7, 1],
            notes: None,
        },
    ]
}

fn devotions() -> Vec<Devotion> {
    vec![
        Devotion {
            id: "d1".into(),
            date: date(2026, 10, 19),
            title: "Strength for Today".into(),
            scripture: "Isaiah 40:31".into(),
            verse: "But they that wait upon the Lord shall renew their strength.".into(),
            body: "Waiting is not idleness. It is trust that God's timing is good.".into(),
            prayer: "Lord, teach me to wait on You and to run without growing weary.".into(),
            author: "Rev. Samuel Boateng".into(),
        },
        Devotion {
            id: "d2".into(),
            date: date(2026, 10, 18),
            title: "Light of the World".into(),
            scripture: "John 8:12".into(),
            verse: "I am the light of the world: he that followeth me shall not walk in darkness."
                .into(),
            body: "Following Christ means walking where His light falls.".into(),
            prayer: "Jesus, light my path this week.".into(),
            author: "Efua Owusu".into(),
        },
        Devotion {
            id: "d3".into(),
            date: date(2026, 10, 17),
            title: "Daily Bread".into(),
            scripture: "Matthew 6:11".into(),
            verse: "Give us this day our daily bread.".into(),
            body: "God provides for today. Tomorrow is in His hands too.".into(),
            prayer: "Father, thank You for today's provision.".into(),
            author: "Kwame Asante".into(),
        },
    ]
}

fn sermons() -> Vec<Sermon> {
    vec![
        Sermon {
            id: "s1".into(),
            title: "Walking in the Light".into(),
            preacher: "Rev. Samuel Boateng".into(),
            date: date(2026, 10, 18),
            scripture: "1 John 1:5-10".into(),
            summary: "Fellowship with God and with one another begins with honesty.".into(),
            media_url: Some("https://media.example.org/sermons/2026-10-18.mp3".into()),
        },
        Sermon {
            id: "s2".into(),
            title: "The Good Shepherd".into(),
            preacher: "Very Rev. Grace Ofori".into(),
            date: date(2026, 10, 11),
            scripture: "John 10:1-18".into(),
            summary: "The shepherd knows his sheep by name.".into(),
            media_url: None,
        },
        Sermon {
            id: "s3".into(),
            title: "Seedtime and Harvest".into(),
            preacher: "Rev. Samuel Boateng".into(),
            date: date(2026, 10, 4),
            scripture: "Galatians 6:7-10".into(),
            summary: "Let us not be weary in well doing.".into(),
            media_url: None,
        },
    ]
}

fn hymns() -> Vec<Hymn> {
    vec![
        Hymn {
            id: "h1".into(),
            number: 1,
            title: "O for a thousand tongues to sing".into(),
            collection: HymnCollection::Mhb,
            verses: strings(&[
                "O for a thousand tongues to sing my great Redeemer's praise",
                "My gracious Master and my God, assist me to proclaim",
            ]),
            chorus: None,
        },
        Hymn {
            id: "h2".into(),
            number: 2,
            title: "Love divine, all loves excelling".into(),
            collection: HymnCollection::Mhb,
            verses: strings(&[
                "Love divine, all loves excelling, joy of heaven, to earth come down",
                "Finish then Thy new creation, pure and spotless let us be",
            ]),
            chorus: None,
        },
        Hymn {
            id: "h3".into(),
            number: 7,
            title: "And can it be that I should gain".into(),
            collection: HymnCollection::Mhb,
            verses: strings(&[
                "And can it be that I should gain an interest in the Saviour's blood?",
                "Long my imprisoned spirit lay, fast bound in sin and nature's night",
            ]),
            chorus: Some("Amazing love! How can it be that Thou, my God, shouldst die for me?".into()),
        },
        Hymn {
            id: "h4".into(),
            number: 1,
            title: "Te Deum Laudamus".into(),
            collection: HymnCollection::Canticle,
            verses: strings(&["We praise thee, O God: we acknowledge thee to be the Lord"]),
            chorus: None,
        },
        Hymn {
            id: "h5".into(),
            number: 432,
            title: "Yesu ne me hwefo".into(),
            collection: HymnCollection::Local,
            verses: strings(&["Yesu ne me hwefo, biribiara renhia me"]),
            chorus: None,
        },
    ]
}

fn season(
    id: &str,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
    color: LiturgicalColor,
    about: &str,
) -> LiturgicalSeason {
    LiturgicalSeason {
        id: id.into(),
        name: name.into(),
        start_date: start,
        end_date: end,
        color,
        description: about.into(),
    }
}

fn seasons() -> Vec<LiturgicalSeason> {
    use LiturgicalColor::*;
    vec![
        season(
            "ls1",
            "Advent",
            date(2025, 11, 30),
            date(2025, 12, 24),
            Purple,
            "Preparation for the coming of Christ.",
        ),
        season(
            "ls2",
            "Christmas",
            date(2025, 12, 25),
            date(2026, 1, 5),
            White,
            "Celebration of the birth of Jesus.",
        ),
        season(
            "ls3",
            "Epiphany",
            date(2026, 1, 6),
            date(2026, 2, 17),
            Green,
            "Christ revealed to the nations.",
        ),
        season(
            "ls4",
            "Lent",
            date(2026, 2, 18),
            date(2026, 4, 4),
            Purple,
            "Forty days of repentance and fasting.",
        ),
        season(
            "ls5",
            "Easter",
            date(2026, 4, 5),
            date(2026, 5, 23),
            White,
            "The resurrection of our Lord.",
        ),
        season(
            "ls6",
            "Pentecost",
            date(2026, 5, 24),
            date(2026, 5, 30),
            Red,
            "The gift of the Holy Spirit.",
        ),
        season(
            "ls7",
            "Ordinary Time",
            date(2026, 5, 31),
            date(2026, 11, 28),
            Green,
            "Growing in discipleship through the year.",
        ),
        season(
            "ls8",
            "Advent",
            date(2026, 11, 29),
            date(2026, 12, 24),
            Purple,
            "Preparation for the coming of Christ.",
        ),
    ]
}

fn prayer_requests() -> Vec<PrayerRequest> {
    vec![
        PrayerRequest {
            id: "pr1".into(),
            requester: "Abena Osei".into(),
            request: "Journeying mercies for my son travelling to Kumasi.".into(),
            date: date(2026, 10, 18),
            status: PrayerStatus::New,
            is_anonymous: false,
            submitted_by: None,
        },
        PrayerRequest {
            id: "pr2".into(),
            requester: "Anonymous".into(),
            request: "Pray for a job after months of searching.".into(),
            date: date(2026, 10, 14),
            status: PrayerStatus::InProgress,
            is_anonymous: true,
            submitted_by: None,
        },
        PrayerRequest {
            id: "pr3".into(),
            requester: "Kojo Antwi".into(),
            request: "Thanksgiving for a safe delivery.".into(),
            date: date(2026, 10, 2),
            status: PrayerStatus::Closed,
            is_anonymous: false,
            submitted_by: None,
        },
    ]
}

fn sick_reports() -> Vec<SickReport> {
    vec![
        SickReport {
            id: "sr1".into(),
            member_name: "Yaw Darko".into(),
            class_name: Some(DEMO_CLASS_NAME.into()),
            details: "Recovering from malaria.".into(),
            location: "Ridge Hospital, Ward 3".into(),
            reported_by: "Ama Mensah".into(),
            date: date(2026, 10, 16),
        },
        SickReport {
            id: "sr2".into(),
            member_name: "Esi Quaye".into(),
            class_name: Some("Ebenezer Class".into()),
            details: "Knee surgery, resting at home.".into(),
            location: "Dansoman".into(),
            reported_by: "Kwame Asante".into(),
            date: date(2026, 10, 9),
        },
    ]
}

fn minister_messages() -> Vec<MinisterMessage> {
    vec![
        MinisterMessage {
            id: "mm1".into(),
            sender_name: "Ama Mensah".into(),
            sender_role: Some(Role::Member),
            subject: "Counselling appointment".into(),
            body: "Could I see you after service next Sunday?".into(),
            date: date(2026, 10, 17),
        },
        MinisterMessage {
            id: "mm2".into(),
            sender_name: "Kwame Asante".into(),
            sender_role: Some(Role::ClassLeader),
            subject: "Class visit".into(),
            body: "Ebenezer Class would be glad to host you on Wednesday.".into(),
            date: date(2026, 10, 10),
        },
    ]
}

fn attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            id: "att1".into(),
            class_id: DEMO_CLASS_ID.into(),
            date: date(2026, 10, 14),
            present_member_ids: strings(&["m1", "m2", "m3"]),
            recorded_by: "Kwame Asante".into(),
        },
        AttendanceRecord {
            id: "att2".into(),
            class_id: DEMO_CLASS_ID.into(),
            date: date(2026, 10, 7),
            present_member_ids: strings(&["m1", "m3"]),
            recorded_by: "Kwame Asante".into(),
        },
    ]
}

fn branches() -> Vec<ChurchBranch> {
    vec![
        ChurchBranch {
            id: "b1".into(),
            name: "Wesley Society".into(),
            location: "Osu, Accra".into(),
            minister: "Rev. Samuel Boateng".into(),
            phone: Some("+233302000001".into()),
        },
        ChurchBranch {
            id: "b2".into(),
            name: "Calvary Society".into(),
            location: "Adabraka, Accra".into(),
            minister: "Very Rev. Grace Ofori".into(),
            phone: None,
        },
        ChurchBranch {
            id: "b3".into(),
            name: "Bethel Society".into(),
            location: "Tema".into(),
            minister: "Rev. Daniel Ansah".into(),
            phone: Some("+233303000003".into()),
        },
    ]
}

fn organizations() -> Vec<Organization> {
    let org = |id: &str, name: &str, description: &str, leader: &str, day: &str| Organization {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        leader: leader.into(),
        meeting_day: day.into(),
    };
    vec![
        org("org1", "Singing Band", "Leads worship in song.", "Abena Osei", "Thursday"),
        org("org2", "Youth Fellowship", "Young adults in faith and service.", "Kojo Antwi", "Saturday"),
        org("org3", "Women's Fellowship", "Prayer, care and outreach.", "Efua Owusu", "Tuesday"),
        org("org4", "Men's Fellowship", "Fellowship and mentoring.", "Kofi Adjei", "Last Saturday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_demo_user() {
        let seed = seed_snapshot();
        let user = seed.users.iter().find(|u| u.id == DEMO_USER_ID).unwrap();
        assert_eq!(user.role, Role::Member);
        assert!(user.in_class(DEMO_CLASS_ID));
    }

    #[test]
    fn test_seed_seasons_do_not_overlap() {
        let seasons = seasons();
        for pair in seasons.windows(2) {
            assert!(pair[0].end_date < pair[1].start_date, "{}", pair[1].name);
        }
        let today = date(2026, 10, 19);
        let current: Vec<_> = seasons.iter().filter(|s| s.contains(today)).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "Ordinary Time");
    }
}
