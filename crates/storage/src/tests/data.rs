use liftplan_domain as domain;

pub const CATALOG: &str = r#"{
    "exercises": {
        "Push Up": {
            "level": "beginner",
            "muscle": "chest",
            "equipment": [],
            "prerequisites": [],
            "instructions": ["Start in a plank position", "Lower your chest to the floor"],
            "tips": ["Keep your core tight"],
            "common_mistakes": ["Sagging hips"],
            "video": "https://www.youtube.com/watch?v=IODxDxX7oi4"
        },
        "Dumbbell Bench Press": {
            "level": "beginner",
            "muscle": "chest",
            "equipment": ["dumbbells", "bench"],
            "prerequisites": ["Push Up"]
        },
        "Archer Push Up": {
            "level": "advanced",
            "muscle": "chest",
            "equipment": ["none"],
            "prerequisites": ["Push Up", "Diamond Push Up"]
        },
        "Inverted Row": {
            "level": "beginner",
            "muscle": "back",
            "equipment": []
        },
        "Squat": {
            "level": "beginner",
            "muscle": "legs",
            "equipment": []
        }
    },
    "goal_set_rep": {
        "strength": {
            "beginner": "3x5",
            "intermediate": "4x5",
            "advanced": "5x3"
        },
        "hypertrophy": {
            "beginner": "3x10-12"
        }
    },
    "equipment_options": [
        {"id": "none", "name": "None"},
        {"id": "dumbbells", "name": "Dumbbells"},
        {"id": "bench", "name": "Workout Bench"}
    ]
}"#;

pub const CATALOG_WITHOUT_OPTIONS: &str = r#"{
    "exercises": {
        "Plank": {"level": "beginner", "muscle": "core", "equipment": []}
    }
}"#;

pub const CATALOG_WITH_CALVES: &str = r#"{
    "exercises": {
        "Calf Raise": {"level": "beginner", "muscle": "calves", "equipment": []},
        "Plank": {"level": "beginner", "muscle": "core", "equipment": []},
        "Single Leg Calf Raise": {"level": "beginner", "muscle": "calves", "equipment": []}
    }
}"#;

pub static PUSH_UP: std::sync::LazyLock<domain::Exercise> = std::sync::LazyLock::new(|| {
    let mut exercise = domain::Exercise::new(
        domain::Name::new("Push Up").unwrap(),
        domain::Level::Beginner,
        domain::Muscle::Chest,
    );
    exercise.details = domain::ExerciseDetails {
        instructions: vec![
            "Start in a plank position".to_string(),
            "Lower your chest to the floor".to_string(),
        ],
        tips: vec!["Keep your core tight".to_string()],
        common_mistakes: vec!["Sagging hips".to_string()],
        video: Some("https://www.youtube.com/watch?v=IODxDxX7oi4".to_string()),
    };
    exercise
});

pub static DUMBBELL_BENCH_PRESS: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| {
        domain::Exercise::new(
            domain::Name::new("Dumbbell Bench Press").unwrap(),
            domain::Level::Beginner,
            domain::Muscle::Chest,
        )
        .with_equipment([
            domain::EquipmentID::new("dumbbells").unwrap(),
            domain::EquipmentID::new("bench").unwrap(),
        ])
        .with_prerequisites([domain::Name::new("Push Up").unwrap()])
    });
