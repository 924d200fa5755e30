//! Built-in fixture data for the dashboard.
//!
//! A small, realistic squad: athletes with recorded results, an assessment
//! module split into sub-modules and screens, integrated test batteries,
//! skill-related performance tests, lab equipment, a fortnight of sessions and
//! four periodization models. Dates cluster around [`snapshot_date`].

use chrono::{NaiveDate, NaiveTime};

use crate::domain::*;

/// Date the built-in snapshot was taken; the default "today" for queries.
pub fn snapshot_date() -> NaiveDate {
    date(2025, 3, 10)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn norms(bands: &[(&str, f64, f64)]) -> Vec<NormBand> {
    bands
        .iter()
        .map(|(label, min, max)| NormBand {
            label: label.to_string(),
            min: *min,
            max: *max,
        })
        .collect()
}

fn perf_test(
    id: &str,
    name: &str,
    description: &str,
    unit: &str,
    scoring: Scoring,
    protocol: &[&str],
    bands: &[(&str, f64, f64)],
) -> PerformanceTest {
    PerformanceTest {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        protocol: strings(protocol),
        unit: unit.into(),
        scoring,
        norms: norms(bands),
    }
}

fn screen(
    id: &str,
    name: &str,
    description: &str,
    duration_min: u16,
    protocol: &[&str],
    metrics: &[&str],
    equipment: &[&str],
) -> Screen {
    Screen {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        protocol: strings(protocol),
        metrics: strings(metrics),
        duration_min,
        equipment: strings(equipment),
    }
}

fn result(
    id: &str,
    test_name: &str,
    on: NaiveDate,
    value: f64,
    unit: &str,
    percentile: u8,
    notes: &str,
) -> AssessmentResult {
    AssessmentResult {
        id: id.into(),
        test_name: test_name.into(),
        date: on,
        value,
        unit: unit.into(),
        percentile,
        notes: notes.into(),
    }
}

pub fn athletes() -> Vec<Athlete> {
    vec![
        Athlete {
            id: "ath_001".into(),
            name: "Maya Okafor".into(),
            sport: Sport::Soccer,
            status: AthleteStatus::Active,
            age: 21,
            position: "Midfielder".into(),
            readiness: 88,
            last_assessed: date(2025, 3, 3),
            assessments: vec![
                result("res_001_cmj", "Countermovement Jump", date(2025, 3, 3), 41.5, "cm", 78, "Clean landing mechanics"),
                result("res_001_yoyo", "Yo-Yo IR1", date(2025, 3, 3), 2040.0, "m", 85, ""),
                result("res_001_sprint", "10 m Sprint", date(2025, 2, 17), 1.74, "s", 70, "Slipped on first rep"),
            ],
        },
        Athlete {
            id: "ath_002".into(),
            name: "Jonas Lindqvist".into(),
            sport: Sport::Basketball,
            status: AthleteStatus::Injured,
            age: 24,
            position: "Guard".into(),
            readiness: 42,
            last_assessed: date(2025, 1, 27),
            assessments: vec![
                result("res_002_cmj", "Countermovement Jump", date(2025, 1, 27), 52.0, "cm", 90, ""),
                result("res_002_tt", "T-Test", date(2025, 1, 27), 9.4, "s", 82, "Pre-injury baseline"),
            ],
        },
        Athlete {
            id: "ath_003".into(),
            name: "Priya Raman".into(),
            sport: Sport::Swimming,
            status: AthleteStatus::Active,
            age: 19,
            position: "Freestyle 200".into(),
            readiness: 91,
            last_assessed: date(2025, 3, 5),
            assessments: vec![
                result("res_003_sr", "Sit and Reach", date(2025, 3, 5), 38.0, "cm", 92, ""),
                result("res_003_grip", "Hand Grip", date(2025, 3, 5), 34.0, "kg", 64, ""),
            ],
        },
        Athlete {
            id: "ath_004".into(),
            name: "Tomás Herrera".into(),
            sport: Sport::Rugby,
            status: AthleteStatus::Recovering,
            age: 27,
            position: "Flanker".into(),
            readiness: 67,
            last_assessed: date(2025, 2, 24),
            assessments: vec![
                result("res_004_bench", "Bench Press 1RM", date(2025, 2, 24), 135.0, "kg", 88, "Shoulder cleared by physio"),
                result("res_004_bf", "Skinfold Body Fat", date(2025, 2, 24), 13.2, "%", 55, ""),
                result("res_004_fms", "FMS Composite", date(2025, 2, 24), 14.0, "pts", 48, "Asymmetry in hurdle step"),
            ],
        },
        Athlete {
            id: "ath_005".into(),
            name: "Aiko Tanaka".into(),
            sport: Sport::Volleyball,
            status: AthleteStatus::Active,
            age: 23,
            position: "Outside Hitter".into(),
            readiness: 79,
            last_assessed: date(2025, 3, 7),
            assessments: vec![
                result("res_005_cmj", "Countermovement Jump", date(2025, 3, 7), 47.0, "cm", 86, ""),
                result("res_005_rt", "Light Board Reaction", date(2025, 3, 7), 0.31, "s", 74, ""),
            ],
        },
        Athlete {
            id: "ath_006".into(),
            name: "Kwame Mensah".into(),
            sport: Sport::Track,
            status: AthleteStatus::Active,
            age: 20,
            position: "100 m / 200 m".into(),
            readiness: 84,
            last_assessed: date(2025, 3, 4),
            assessments: vec![
                result("res_006_sprint", "10 m Sprint", date(2025, 3, 4), 1.62, "s", 96, "Season best"),
                result("res_006_flying", "Flying 30 m", date(2025, 3, 4), 2.91, "s", 94, ""),
            ],
        },
        Athlete {
            id: "ath_007".into(),
            name: "Elena Petrova".into(),
            sport: Sport::Soccer,
            status: AthleteStatus::Inactive,
            age: 29,
            position: "Goalkeeper".into(),
            readiness: 58,
            last_assessed: date(2024, 11, 18),
            assessments: vec![],
        },
        Athlete {
            id: "ath_008".into(),
            name: "Liam O'Connor".into(),
            sport: Sport::Rugby,
            status: AthleteStatus::Active,
            age: 25,
            position: "Prop".into(),
            readiness: 73,
            last_assessed: date(2025, 2, 28),
            assessments: vec![
                result("res_008_squat", "Back Squat 1RM", date(2025, 2, 28), 210.0, "kg", 91, ""),
                result("res_008_bronco", "Bronco", date(2025, 2, 28), 318.0, "s", 40, "Conditioning block next"),
            ],
        },
    ]
}

pub fn sub_modules() -> Vec<SubModule> {
    vec![
        SubModule {
            id: "sm_anthro".into(),
            name: "Anthropometry & Body Composition".into(),
            category: Category::BodyComposition,
            summary: "Stature, mass and composition estimates taken fasted, before any exercise.".into(),
            screens: vec![
                screen("scr_stature", "Stature & Body Mass", "Standing height and mass on calibrated scales.", 5,
                    &["Remove shoes and heavy clothing", "Measure stature at full inhalation", "Record mass to 0.1 kg"],
                    &["Height (cm)", "Mass (kg)", "BMI"], &["eq_scale"]),
                screen("scr_skinfold", "Seven-Site Skinfold", "ISAK seven-site skinfold with Jackson-Pollock estimate.", 15,
                    &["Mark sites on right side", "Take duplicate readings per site", "Take a third if readings differ by >5%"],
                    &["Sum of 7 (mm)", "Body fat (%)"], &["eq_caliper"]),
                screen("scr_bia", "Bioelectrical Impedance", "Segmental BIA for lean mass distribution.", 8,
                    &["Confirm hydration status", "Stand on electrodes for 60 s"],
                    &["Lean mass (kg)", "Phase angle"], &["eq_bia"]),
            ],
        },
        SubModule {
            id: "sm_strength".into(),
            name: "Maximal Strength".into(),
            category: Category::Strength,
            summary: "Repetition-maximum and isometric tests for upper and lower body.".into(),
            screens: vec![
                screen("scr_squat", "Back Squat 1RM", "Progressive loading to a one-repetition maximum.", 25,
                    &["Warm up at 50% x 10, 70% x 5, 85% x 2", "Attempt singles with 3 min rest", "Stop after two failed attempts"],
                    &["1RM (kg)", "Relative strength (kg/kg)"], &["eq_rack"]),
                screen("scr_bench", "Bench Press 1RM", "Progressive loading to a one-repetition maximum.", 20,
                    &["Spotter required", "Pause bar on chest for each single"],
                    &["1RM (kg)"], &["eq_rack"]),
                screen("scr_imtp", "Isometric Mid-Thigh Pull", "Peak force on a fixed bar over force plates.", 12,
                    &["Set bar at mid-thigh", "Three 5 s maximal pulls, 2 min rest"],
                    &["Peak force (N)", "RFD 0-200 ms"], &["eq_forceplate", "eq_rack"]),
            ],
        },
        SubModule {
            id: "sm_aerobic".into(),
            name: "Aerobic Capacity".into(),
            category: Category::Endurance,
            summary: "Field and lab estimates of maximal aerobic power.".into(),
            screens: vec![
                screen("scr_yoyo", "Yo-Yo Intermittent Recovery 1", "Shuttle runs at increasing speed with 10 s active recovery.", 25,
                    &["Mark 20 m and 5 m recovery zone", "Two warnings before elimination"],
                    &["Distance (m)", "Estimated VO2max"], &["eq_gates"]),
                screen("scr_vo2", "Treadmill VO2max", "Graded exercise test with breath-by-breath gas analysis.", 30,
                    &["Calibrate analyser", "Increase grade 1% per minute", "Terminate at volitional exhaustion"],
                    &["VO2max (ml/kg/min)", "HRmax", "VT1/VT2"], &["eq_metabolic"]),
            ],
        },
        SubModule {
            id: "sm_mobility".into(),
            name: "Mobility & Flexibility".into(),
            category: Category::Flexibility,
            summary: "Range-of-motion screens for the posterior chain and hips.".into(),
            screens: vec![
                screen("scr_sitreach", "Sit and Reach", "Hamstring and lower back flexibility.", 5,
                    &["Legs straight, feet against box", "Best of three reaches"],
                    &["Reach (cm)"], &["eq_sitreach"]),
                screen("scr_thomas", "Modified Thomas Test", "Hip flexor length, bilateral.", 6,
                    &["Lie supine at plinth edge", "Measure thigh angle with goniometer"],
                    &["Hip angle (deg)"], &[]),
            ],
        },
        SubModule {
            id: "sm_movement".into(),
            name: "Movement Screen".into(),
            category: Category::Movement,
            summary: "Functional Movement Screen and landing mechanics.".into(),
            screens: vec![
                screen("scr_fms", "Functional Movement Screen", "Seven graded movement patterns.", 15,
                    &["Score each pattern 0-3", "Clearing tests for pain"],
                    &["Composite score", "Asymmetries"], &["eq_fmskit"]),
                screen("scr_lss", "Landing Error Scoring", "Drop jump landing filmed in two planes.", 10,
                    &["Drop from 30 cm box", "Jump vertically on landing", "Three trials"],
                    &["LESS score"], &["eq_camera"]),
            ],
        },
    ]
}

pub fn batteries() -> Vec<TestBattery> {
    vec![
        TestBattery {
            id: "bat_field".into(),
            name: "Team Sport Field Battery".into(),
            category: Category::Power,
            summary: "Pre-season field battery run in a single 90 minute session.".into(),
            tests: vec![
                perf_test("it_cmj", "Countermovement Jump", "Jump height from flight time.", "cm", Scoring::HigherIsBetter,
                    &["Hands on hips", "Three jumps, 30 s rest", "Record best"],
                    &[("Poor", 0.0, 30.0), ("Average", 30.0, 40.0), ("Good", 40.0, 50.0), ("Excellent", 50.0, 100.0)]),
                perf_test("it_sprint10", "10 m Sprint", "Acceleration from a standing start.", "s", Scoring::LowerIsBetter,
                    &["Start 0.5 m behind first gate", "Three trials, 2 min rest"],
                    &[("Excellent", 0.0, 1.70), ("Good", 1.70, 1.80), ("Average", 1.80, 1.95), ("Poor", 1.95, 5.0)]),
                perf_test("it_yoyo", "Yo-Yo IR1", "Intermittent endurance.", "m", Scoring::HigherIsBetter,
                    &["Audio-paced 20 m shuttles", "10 s active recovery"],
                    &[("Poor", 0.0, 1000.0), ("Average", 1000.0, 1600.0), ("Good", 1600.0, 2200.0), ("Excellent", 2200.0, 5000.0)]),
            ],
        },
        TestBattery {
            id: "bat_strength".into(),
            name: "Strength Profile".into(),
            category: Category::Strength,
            summary: "Gym-based maximal and relative strength profile.".into(),
            tests: vec![
                perf_test("it_squat", "Back Squat 1RM", "Maximal lower body strength.", "kg", Scoring::HigherIsBetter,
                    &["Parallel depth", "Three attempts after warm-up"],
                    &[("Novice", 0.0, 100.0), ("Intermediate", 100.0, 160.0), ("Advanced", 160.0, 400.0)]),
                perf_test("it_bench", "Bench Press 1RM", "Maximal upper body pushing strength.", "kg", Scoring::HigherIsBetter,
                    &["Touch-and-pause", "Spotter required"],
                    &[("Novice", 0.0, 80.0), ("Intermediate", 80.0, 120.0), ("Advanced", 120.0, 300.0)]),
                perf_test("it_grip", "Hand Grip", "Isometric grip strength, dominant hand.", "kg", Scoring::HigherIsBetter,
                    &["Elbow at 90 degrees", "Best of three"],
                    &[("Below average", 0.0, 30.0), ("Average", 30.0, 45.0), ("Above average", 45.0, 100.0)]),
            ],
        },
        TestBattery {
            id: "bat_conditioning".into(),
            name: "Conditioning Check".into(),
            category: Category::Endurance,
            summary: "In-season conditioning monitors with minimal fatigue cost.".into(),
            tests: vec![
                perf_test("it_bronco", "Bronco", "1.2 km shuttle run (20-40-60 m x 5).", "s", Scoring::LowerIsBetter,
                    &["Start on whistle", "Touch each line with foot"],
                    &[("Excellent", 0.0, 270.0), ("Good", 270.0, 300.0), ("Average", 300.0, 330.0), ("Poor", 330.0, 900.0)]),
                perf_test("it_hrr", "Heart Rate Recovery", "Beats recovered in 60 s after a submaximal run.", "bpm", Scoring::HigherIsBetter,
                    &["5 min at 12 km/h", "Seated recovery for 60 s"],
                    &[("Poor", 0.0, 20.0), ("Average", 20.0, 35.0), ("Good", 35.0, 80.0)]),
            ],
        },
    ]
}

pub fn skill_components() -> Vec<SkillComponent> {
    vec![
        SkillComponent {
            id: "sk_agility".into(),
            name: "Agility".into(),
            kind: SkillKind::Agility,
            description: "Rapid whole-body change of direction in response to a stimulus.".into(),
            tests: vec![
                perf_test("sp_ttest", "T-Test", "Forward, lateral and backpedal around four cones.", "s", Scoring::LowerIsBetter,
                    &["Shuffle without crossing feet", "Two trials"],
                    &[("Excellent", 0.0, 9.5), ("Good", 9.5, 10.5), ("Average", 10.5, 11.5), ("Poor", 11.5, 30.0)]),
                perf_test("sp_505", "505 Test", "Single 180 degree turn after a 10 m run-in.", "s", Scoring::LowerIsBetter,
                    &["Turn on dominant and non-dominant leg"],
                    &[("Excellent", 0.0, 2.2), ("Average", 2.2, 2.5), ("Poor", 2.5, 10.0)]),
            ],
        },
        SkillComponent {
            id: "sk_balance".into(),
            name: "Balance".into(),
            kind: SkillKind::Balance,
            description: "Maintaining the centre of mass over the base of support.".into(),
            tests: vec![
                perf_test("sp_stork", "Stork Stand", "Single-leg stance on the ball of the foot.", "s", Scoring::HigherIsBetter,
                    &["Hands on hips", "Raise heel on signal", "Best of three"],
                    &[("Poor", 0.0, 25.0), ("Average", 25.0, 40.0), ("Good", 40.0, 50.0), ("Excellent", 50.0, 600.0)]),
                perf_test("sp_ybal", "Y-Balance Lower Quarter", "Composite reach in three directions.", "%", Scoring::HigherIsBetter,
                    &["Three practice reaches", "Normalize to limb length"],
                    &[("At risk", 0.0, 89.0), ("Normal", 89.0, 200.0)]),
            ],
        },
        SkillComponent {
            id: "sk_coordination".into(),
            name: "Coordination".into(),
            kind: SkillKind::Coordination,
            description: "Smooth integration of senses and body parts into efficient movement.".into(),
            tests: vec![perf_test(
                "sp_wall", "Alternate Hand Wall Toss", "Catches in 30 s from 2 m.", "catches", Scoring::HigherIsBetter,
                &["Underarm throw", "Alternate hands each catch"],
                &[("Poor", 0.0, 20.0), ("Average", 20.0, 30.0), ("Excellent", 30.0, 100.0)],
            )],
        },
        SkillComponent {
            id: "sk_power".into(),
            name: "Power".into(),
            kind: SkillKind::Power,
            description: "Ability to exert maximal force in minimal time.".into(),
            tests: vec![
                perf_test("sp_vjump", "Vertical Jump", "Sargent jump with arm swing.", "cm", Scoring::HigherIsBetter,
                    &["Chalk fingertips", "Best of three"],
                    &[("Poor", 0.0, 40.0), ("Average", 40.0, 55.0), ("Excellent", 55.0, 120.0)]),
                perf_test("sp_mbthrow", "Seated Medicine Ball Throw", "3 kg chest pass from seated.", "m", Scoring::HigherIsBetter,
                    &["Back against wall", "Measure to first contact"],
                    &[("Poor", 0.0, 4.0), ("Average", 4.0, 5.5), ("Excellent", 5.5, 15.0)]),
            ],
        },
        SkillComponent {
            id: "sk_reaction".into(),
            name: "Reaction Time".into(),
            kind: SkillKind::ReactionTime,
            description: "Interval between a stimulus and the initiation of a response.".into(),
            tests: vec![
                perf_test("sp_ruler", "Ruler Drop", "Catch distance converted to time.", "s", Scoring::LowerIsBetter,
                    &["Forearm rests on table", "Five drops, drop the extremes"],
                    &[("Excellent", 0.0, 0.15), ("Average", 0.15, 0.20), ("Poor", 0.20, 1.0)]),
                perf_test("sp_lightboard", "Light Board Reaction", "Mean time to strike randomly lit pads.", "s", Scoring::LowerIsBetter,
                    &["30 s trial", "Dominant hand only"],
                    &[("Excellent", 0.0, 0.30), ("Average", 0.30, 0.40), ("Poor", 0.40, 2.0)]),
            ],
        },
        SkillComponent {
            id: "sk_speed".into(),
            name: "Speed".into(),
            kind: SkillKind::Speed,
            description: "Ability to move the body from one point to another quickly.".into(),
            tests: vec![perf_test(
                "sp_flying30", "Flying 30 m", "Maximal velocity after a 20 m run-in.", "s", Scoring::LowerIsBetter,
                &["Gates at 20 m and 50 m", "Two trials"],
                &[("Excellent", 0.0, 3.0), ("Good", 3.0, 3.3), ("Average", 3.3, 3.6), ("Poor", 3.6, 10.0)],
            )],
        },
    ]
}

pub fn equipment() -> Vec<Equipment> {
    fn item(
        id: &str,
        name: &str,
        kind: &str,
        location: &str,
        status: EquipmentStatus,
        last_calibrated: NaiveDate,
        interval: u32,
    ) -> Equipment {
        Equipment {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            location: location.into(),
            status,
            last_calibrated,
            calibration_interval_days: interval,
        }
    }

    vec![
        item("eq_forceplate", "Dual Force Plates", "Force plate", "Performance Lab", EquipmentStatus::Operational, date(2025, 1, 15), 60),
        item("eq_metabolic", "Metabolic Cart", "Gas analyser", "Physiology Lab", EquipmentStatus::Operational, date(2025, 2, 20), 30),
        item("eq_gates", "Timing Gates (6)", "Photocell", "Indoor Track", EquipmentStatus::Operational, date(2024, 12, 1), 90),
        item("eq_scale", "Medical Scale", "Scale", "Clinic", EquipmentStatus::Operational, date(2024, 9, 10), 180),
        item("eq_caliper", "Harpenden Caliper", "Skinfold caliper", "Clinic", EquipmentStatus::Operational, date(2024, 3, 4), 365),
        item("eq_bia", "Segmental BIA Analyser", "Impedance", "Clinic", EquipmentStatus::Maintenance, date(2024, 12, 20), 90),
        item("eq_rack", "Power Rack & Bar", "Strength", "Weight Room", EquipmentStatus::Operational, date(2024, 8, 1), 365),
        item("eq_sitreach", "Sit-and-Reach Box", "Flexibility", "Clinic", EquipmentStatus::Operational, date(2024, 6, 15), 365),
        item("eq_camera", "High-Speed Camera", "Video", "Performance Lab", EquipmentStatus::OutOfService, date(2024, 10, 1), 120),
        item("eq_fmskit", "FMS Test Kit", "Movement", "Clinic", EquipmentStatus::Operational, date(2025, 1, 2), 365),
    ]
}

pub fn sessions() -> Vec<Session> {
    #[allow(clippy::too_many_arguments)]
    fn session(
        id: &str,
        title: &str,
        on: NaiveDate,
        start: NaiveTime,
        duration_min: u16,
        location: &str,
        athletes: &[&str],
        battery: Option<&str>,
    ) -> Session {
        Session {
            id: id.into(),
            title: title.into(),
            date: on,
            start,
            duration_min,
            location: location.into(),
            athlete_ids: strings(athletes),
            battery_id: battery.map(String::from),
        }
    }

    vec![
        session("ses_001", "Soccer pre-season testing", date(2025, 3, 3), time(9, 0), 90, "Indoor Track", &["ath_001", "ath_007"], Some("bat_field")),
        session("ses_002", "Rugby strength profile", date(2025, 3, 11), time(7, 30), 75, "Weight Room", &["ath_004", "ath_008"], Some("bat_strength")),
        session("ses_003", "Volleyball jump monitoring", date(2025, 3, 12), time(16, 0), 45, "Performance Lab", &["ath_005"], None),
        session("ses_004", "Rugby conditioning check", date(2025, 3, 11), time(6, 45), 60, "Outdoor Pitch", &["ath_004", "ath_008"], Some("bat_conditioning")),
        session("ses_005", "Sprint squad field battery", date(2025, 3, 14), time(10, 0), 90, "Indoor Track", &["ath_006"], Some("bat_field")),
        session("ses_006", "Return-to-play screen", date(2025, 3, 18), time(13, 0), 60, "Clinic", &["ath_002"], None),
        session("ses_007", "Swim squad mobility", date(2025, 3, 21), time(8, 0), 40, "Clinic", &["ath_003"], None),
    ]
}

pub fn periodization_models() -> Vec<PeriodizationModel> {
    fn phase(name: &str, weeks: u8, focus: &str, intensity_pct: u8, volume: Volume) -> Phase {
        Phase {
            name: name.into(),
            weeks,
            focus: focus.into(),
            intensity_pct,
            volume,
        }
    }

    vec![
        PeriodizationModel {
            id: "pm_linear".into(),
            name: "Classic Linear".into(),
            kind: PeriodizationKind::Linear,
            description: "Volume falls and intensity rises across successive mesocycles.".into(),
            phases: vec![
                phase("Hypertrophy", 4, "Muscle cross-sectional area", 65, Volume::High),
                phase("Strength", 4, "Maximal force", 80, Volume::Moderate),
                phase("Power", 3, "Rate of force development", 85, Volume::Low),
                phase("Peak", 1, "Taper", 90, Volume::Low),
            ],
        },
        PeriodizationModel {
            id: "pm_dup".into(),
            name: "Daily Undulating".into(),
            kind: PeriodizationKind::Undulating,
            description: "Loading varies session to session within each week.".into(),
            phases: vec![
                phase("Accumulation", 4, "Rotating hypertrophy/strength/power days", 75, Volume::High),
                phase("Intensification", 4, "Heavier rotation, fewer reps", 85, Volume::Moderate),
            ],
        },
        PeriodizationModel {
            id: "pm_block".into(),
            name: "Block (ATR)".into(),
            kind: PeriodizationKind::Block,
            description: "Concentrated loading blocks: accumulation, transmutation, realization.".into(),
            phases: vec![
                phase("Accumulation", 3, "General capacities", 70, Volume::High),
                phase("Transmutation", 3, "Sport-specific capacities", 82, Volume::Moderate),
                phase("Realization", 2, "Competition readiness", 90, Volume::Low),
            ],
        },
        PeriodizationModel {
            id: "pm_conjugate".into(),
            name: "Conjugate".into(),
            kind: PeriodizationKind::Conjugate,
            description: "Max-effort and dynamic-effort methods trained concurrently.".into(),
            phases: vec![phase("Concurrent", 6, "Max effort + dynamic effort", 80, Volume::Moderate)],
        },
    ]
}
