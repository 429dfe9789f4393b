use confdata::{SiteConfig, SiteInput};

/// Initialize test logging so pipeline warnings show up with --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// The canonical fixture: two tracks, a tutorial, a workshop, a social, a
/// sponsor and a committee, authored as YAML the same way the production
/// source files are.
pub fn sample_input() -> SiteInput {
    serde_yaml::from_str(SAMPLE_YAML).expect("sample fixture must deserialize")
}

/// Config matching the fixture: one-hour Q&A slots, two expected sessions
pub fn sample_config() -> SiteConfig {
    SiteConfig::default()
}

const SAMPLE_YAML: &str = r#"
committee:
  - role: General Chair
    name: Ada Lovelace
    aff: Analytical Engines
  - role: Area Chair
    name: Charles Babbage
    aff: University of Cambridge
  - role: Area Chair
    name: Grace Hopper
    aff: United States Navy
    im: grace.png

calendar:
  - title: Opening Remarks
    start: "2020-07-06T04:45:00Z"
    end: "2020-07-06T05:00:00Z"
    location: plenary_session_opening.html
    link: plenary_session_opening.html
    category: time
    calendarId: "---"
    type: Plenary Sessions
    view: day
  - title: Coffee Break
    start: "2020-07-06T07:00:00Z"
    end: "2020-07-06T07:30:00Z"
    location: ""
    link: ""
    category: time
    calendarId: "---"
    type: Break
    view: day

plenary_sessions:
  - UID: opening
    title: Opening Remarks
    image: opening.png
    day: "Monday, July 6"
    presenter: Ada Lovelace
    institution: Analytical Engines
    sessions:
      - name: P-Opening
        start_time: "2020-07-06T04:45:00Z"
        end_time: "2020-07-06T05:00:00Z"
        zoom_link: https://zoom.us/j/opening
  - UID: business_meeting
    title: Business Meeting
    image: meeting.png
    day: "Tuesday, July 7"
    sessions:
      - name: P-Business Meeting
        start_time: "2020-07-07T13:00:00Z"
        end_time: "2020-07-07T14:00:00Z"
        zoom_link: https://zoom.us/j/business

plenary_videos:
  business_meeting:
    - UID: bm.1
      title: Treasurer Report
      speakers: Ada Lovelace
      presentation_id: "38920000"

tutorials:
  - UID: T1
    title: Advanced Schedule Joinery
    organizers:
      - Ada Lovelace
      - Charles Babbage
    abstract: Everything about joining schedules.
    website: https://tutorial.example.org
    info: Two live sessions with Q&A.
    sessions:
      - name: Live Session 1
        start_time: "2020-07-05T09:00:00Z"
        end_time: "2020-07-05T10:00:00Z"
        livestream_id: "38920001"
        zoom_link: https://zoom.us/j/t1a
      - name: Live Session 2
        start_time: "2020-07-05T10:30:00Z"
        end_time: "2020-07-05T11:30:00Z"
        livestream_id: "38920002"
        zoom_link: https://zoom.us/j/t1b

tracks:
  - name: main
    papers:
      - UID: main.1
        title: Composite Keys Considered Helpful
        authors: Ada Lovelace|Charles Babbage
        keywords: joins|schedules
        abstract: We join papers to sessions with composite keys.
        track: Machine Learning
        paper_type: Long
        pdf_url: https://example.org/main.1.pdf
      - UID: main.2
        title: Calendars All The Way Down
        authors: Charles Babbage
        keywords: calendars
        abstract: Weekly blocks from daily sessions.
        track: Generation
        paper_type: Short
        pdf_url: https://example.org/main.2.pdf
    sessions:
      1A:
        date: 2020-07-06_05:00:00
        papers:
          - main.1
          - main.2
      2A:
        date: 2020-07-06_08:00:00
        papers:
          - main.1
    zoom_links:
      - UID: main.1
        session_name: 1A
        starttime: "2020-07-06T05:00:00Z"
        zoom_join_link: https://zoom.us/j/m1-1a
      - UID: main.2
        session_name: 1A
        starttime: "2020-07-06T05:00:00Z"
        zoom_join_link: https://zoom.us/j/m2-1a
      - UID: main.1
        session_name: 2A
        starttime: "2020-07-06T08:00:00Z"
        zoom_join_link: https://zoom.us/j/m1-2a
    presentation_ids:
      - UID: main.1
        presentation_id: "38921111"
  - name: demo
    papers:
      - UID: demo.1
        title: A Live Demonstration
        authors: Grace Hopper
        keywords: demos
        abstract: Watch it run.
        track: Demo
        paper_type: Demo
        demo_url: http://demo.example.org
    sessions:
      D1:
        date: 2020-07-07_05:00:00
        papers:
          - demo.1
    zoom_links:
      - UID: demo.1
        session_name: D1
        starttime: "2020-07-07T05:00:00Z"
        zoom_join_link: https://zoom.us/j/d1
    presentation_ids:
      - UID: demo.1
        presentation_id: "38922222"

paper_recommendations:
  main.1:
    - main.2
    - demo.1
  main.2: []

paper_projections:
  - id: main.1
    pos: [0.1, 0.9]
  - id: main.2
    pos: [0.5, 0.5]

workshops:
  - UID: W1
    title: Workshop on Reproducible Schedules
    day: Friday
    organizers:
      - Grace Hopper
    abstract: Schedules you can rebuild.
    website: https://w1.example.org
    rocketchat_channel: workshop-w1
    sessions:
      - name: W-Morning
        start_time: "2020-07-10T09:00:00Z"
        end_time: "2020-07-10T12:00:00Z"
        zoom_link: https://zoom.us/j/w1

workshop_papers:
  W1:
    - UID: W1.1
      title: Calendars as Data
      speakers: Grace Hopper
      presentation_id: "38923333"

workshop_schedules:
  W1:
    - time: "09:00"
      item: Welcome

socials:
  - UID: S1
    name: Trivia Night
    description: Bring a team.
    organizers:
      members:
        - Ada Lovelace
    sessions:
      - name: S-Trivia
        start_time: 2020-07-07_19:00:00
        end_time: 2020-07-07_20:00:00
        zoom_link: https://zoom.us/j/trivia

sponsors:
  - name: Quantum Ventures
    level: Gold
    website: https://qv.example.org
    schedule:
      - start: "2020-07-06T08:00:00Z"
        end: "2020-07-06T09:00:00Z"
        label: Booth open

faq:
  FAQ:
    - question: How do I join a session?
      answer: Use the zoom link on the paper page.

code_of_conduct:
  CodeOfConduct: Be kind.
"#;
