use super::domain::{AnswerKey, Interstitial, InterstitialKind, QuestionDefinition, QuestionType};

const DEMOGRAPHICS: &str = "Demographics";
const MEMORY: &str = "Memory";
const COGNITIVE: &str = "Cognitive";
const EXECUTIVE_FUNCTION: &str = "Executive Function";
const ATTENTION: &str = "Attention";
const ORIENTATION: &str = "Orientation";
const LANGUAGE: &str = "Language";
const MOOD_AND_BEHAVIOR: &str = "Mood & Behavior";

fn frequency(id: u32, text: &str, category: &str) -> QuestionDefinition {
    QuestionDefinition {
        id,
        text: text.to_string(),
        question_type: QuestionType::Frequency,
        category: category.to_string(),
        options: None,
    }
}

fn reasoning(id: u32, text: &str, options: [&str; 4]) -> QuestionDefinition {
    QuestionDefinition {
        id,
        text: text.to_string(),
        question_type: QuestionType::Iq,
        category: COGNITIVE.to_string(),
        options: Some(options.iter().map(|option| option.to_string()).collect()),
    }
}

pub(crate) fn questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition {
            id: 1,
            text: "What is your gender?".to_string(),
            question_type: QuestionType::Gender,
            category: DEMOGRAPHICS.to_string(),
            options: Some(vec![
                "Male".to_string(),
                "Female".to_string(),
                "Other".to_string(),
                "Prefer not to say".to_string(),
            ]),
        },
        frequency(2, "Do you frequently forget recent conversations?", MEMORY),
        frequency(
            3,
            "Do you have trouble recalling the names of people you meet often?",
            MEMORY,
        ),
        frequency(4, "Do you misplace items frequently?", MEMORY),
        frequency(
            5,
            "Do you have difficulty remembering appointments or events?",
            MEMORY,
        ),
        frequency(
            6,
            "Can you easily remember details from recent television shows or books?",
            MEMORY,
        ),
        frequency(
            7,
            "Do you find yourself asking the same questions repeatedly?",
            MEMORY,
        ),
        frequency(8, "Is it challenging to remember recent instructions?", MEMORY),
        frequency(
            9,
            "Do you frequently forget what you intended to do upon entering a room?",
            MEMORY,
        ),
        reasoning(
            10,
            "If a train travels 60 miles in 1 hour, how far will it travel in 2.5 hours?",
            ["120 miles", "150 miles", "180 miles", "100 miles"],
        ),
        frequency(
            11,
            "Do you have trouble recalling details from recent meals?",
            MEMORY,
        ),
        frequency(
            12,
            "Do you easily recall phone numbers you recently learned?",
            MEMORY,
        ),
        frequency(
            13,
            "Do you struggle to remember where you parked your car?",
            MEMORY,
        ),
        frequency(14, "Are you forgetting to perform daily tasks?", MEMORY),
        frequency(15, "Do you rely heavily on reminders or notes?", MEMORY),
        frequency(
            16,
            "Do you find yourself confused about recent family activities?",
            MEMORY,
        ),
        reasoning(
            17,
            "Which number comes next in the sequence: 2, 6, 12, 20, 30, ?",
            ["36", "40", "42", "44"],
        ),
        frequency(
            18,
            "Do you find planning tasks challenging?",
            EXECUTIVE_FUNCTION,
        ),
        frequency(
            19,
            "Is it difficult for you to solve simple problems?",
            EXECUTIVE_FUNCTION,
        ),
        frequency(
            20,
            "Do you struggle with managing your time effectively?",
            EXECUTIVE_FUNCTION,
        ),
        frequency(
            21,
            "Can you easily organize your daily activities?",
            EXECUTIVE_FUNCTION,
        ),
        frequency(
            22,
            "Do you find following recipes or instructions challenging?",
            EXECUTIVE_FUNCTION,
        ),
        reasoning(
            23,
            "If all Bloops are Razzles and all Razzles are Lazzles, are all Bloops definitely Lazzles?",
            ["Yes", "No", "Cannot determine", "Sometimes"],
        ),
        frequency(
            24,
            "Is maintaining focus on complex tasks difficult for you?",
            ATTENTION,
        ),
        frequency(
            25,
            "Do you frequently start tasks and leave them unfinished?",
            ATTENTION,
        ),
        frequency(
            26,
            "Do you find it hard to concentrate on conversations?",
            ATTENTION,
        ),
        frequency(
            27,
            "Can you easily maintain attention when reading?",
            ATTENTION,
        ),
        frequency(
            28,
            "Do you frequently lose focus when watching television?",
            ATTENTION,
        ),
        reasoning(
            29,
            "A farmer has 17 sheep. All but 9 die. How many sheep are left?",
            ["8", "9", "17", "0"],
        ),
        frequency(
            30,
            "Do you frequently feel confused about the date?",
            ORIENTATION,
        ),
        frequency(
            31,
            "Can you easily remember the day of the week?",
            ORIENTATION,
        ),
        frequency(
            32,
            "Do you find yourself unsure about your current location occasionally?",
            ORIENTATION,
        ),
        frequency(
            33,
            "Do you frequently forget the month or year?",
            ORIENTATION,
        ),
        reasoning(
            34,
            "Which shape does not belong: Circle, Square, Triangle, Cube?",
            ["Circle", "Square", "Triangle", "Cube"],
        ),
        frequency(
            35,
            "Do you frequently have trouble finding the right word?",
            LANGUAGE,
        ),
        frequency(
            36,
            "Is it challenging for you to understand common phrases or expressions?",
            LANGUAGE,
        ),
        frequency(37, "Do you often forget names of common objects?", LANGUAGE),
        frequency(
            38,
            "Do you struggle to follow conversations involving multiple people?",
            LANGUAGE,
        ),
        frequency(
            39,
            "Do you often feel unusually sad or depressed?",
            MOOD_AND_BEHAVIOR,
        ),
        frequency(
            40,
            "Have family or friends commented on changes in your mood or behavior?",
            MOOD_AND_BEHAVIOR,
        ),
    ]
}

pub(crate) fn answer_key() -> AnswerKey {
    [
        (10, "150 miles"),
        (17, "42"),
        (23, "Yes"),
        (29, "9"),
        (34, "Cube"),
    ]
    .into_iter()
    .collect()
}

pub(crate) fn interstitials() -> Vec<Interstitial> {
    vec![
        Interstitial {
            trigger_after_question: 8,
            title: "Medical Notice".to_string(),
            content: "Based on your responses, we're detecting patterns that warrant attention.\n\nThis assessment helps identify cognitive changes early.\n\nContinuing will provide you with a comprehensive analysis of your results.".to_string(),
            kind: InterstitialKind::Warning,
        },
        Interstitial {
            trigger_after_question: 20,
            title: "Progress Update".to_string(),
            content: "You're halfway through the assessment.\n\nOur system is analyzing your response patterns to provide accurate insights.\n\nPlease continue answering honestly for the most reliable results.".to_string(),
            kind: InterstitialKind::Info,
        },
        Interstitial {
            trigger_after_question: 27,
            title: "Memory Check".to_string(),
            content: "Do you remember the first question we asked you at the start of this assessment?\n\nWe asked about your gender to help personalize your results.\n\nThis memory check helps us evaluate your recall ability.".to_string(),
            kind: InterstitialKind::Recall,
        },
    ]
}
