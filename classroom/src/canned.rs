//! Canned tool responses.
//!
//! DESIGN
//! ======
//! Each builder is a pure function of its request: the same form values
//! always produce the same payload. The evaluator's scores come from an RNG
//! seeded by file name and position, so a report is reproducible without
//! reading the uploaded sheet.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::choices::{Complexity, Language};
use crate::request::{EvaluationRequest, SimplifyRequest, StoryRequest, VisualAidRequest, WorksheetRequest};
use crate::result::{
    DiagramLabel, EvaluationReport, LabelAnchor, Recommendation, SimplifiedAnswer, Slide, Storyboard, StudentResult,
    Tier, TierSheet, VisualAid, WorksheetSet,
};

#[cfg(test)]
#[path = "canned_test.rs"]
mod canned_test;

pub const VISUAL_AID_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=800&h=600&fit=crop";

pub const TOTAL_MARKS: u32 = 100;
const MIN_SCORE: u32 = 60;

/// Topics an evaluation may flag, in the order they are reported.
pub const WEAK_TOPICS: [&str; 3] = ["Algebra", "Geometry", "Trigonometry"];

const STORY_SLIDES: [(&str, &str); 9] = [
    (
        "Slide 1: Introduction",
        "Meet Ravi, a farmer in Maharashtra who grows different crops in his field.",
    ),
    (
        "Slide 2: The Problem",
        "Ravi notices his crops grow differently in various parts of his field.",
    ),
    (
        "Slide 3: Black Soil Discovery",
        "In one corner, the black soil holds water well - perfect for cotton!",
    ),
    (
        "Slide 4: Red Soil Area",
        "The red soil area needs more water but grows excellent vegetables.",
    ),
    (
        "Slide 5: Sandy Soil Benefits",
        "Near the river, sandy soil drains quickly - ideal for watermelons.",
    ),
    (
        "Slide 6: Local Analogy",
        "Just like we use different containers at home - steel for water, clay for curd.",
    ),
    ("Slide 7: Learning Points", "Different soils have different properties and uses."),
    ("Slide 8: Classroom Activity", "Students collect soil samples and test water absorption."),
    ("Slide 9: Conclusion", "Understanding soil helps farmers choose the right crops!"),
];

const BEGINNER_SHEET: &str = "BEGINNER LEVEL WORKSHEET - Solar System

📚 DEFINITIONS:
1. Solar System: _________________
2. Planet: _____________________
3. Sun: _______________________
4. Moon: ______________________

🔗 MATCH THE FOLLOWING:
A. Earth          1. Biggest planet
B. Jupiter        2. Our home planet
C. Sun            3. Earth's satellite
D. Moon           4. Center of solar system

✅ CIRCLE THE CORRECT ANSWER:
- How many planets are there? (7, 8, 9)
- What is at the center? (Moon, Sun, Earth)";

const INTERMEDIATE_SHEET: &str = "INTERMEDIATE LEVEL WORKSHEET - Solar System

📝 MULTIPLE CHOICE QUESTIONS:
1. Which planet is closest to the Sun?
   a) Venus  b) Mercury  c) Earth  d) Mars

2. What causes day and night on Earth?
   a) Moon's rotation  b) Earth's rotation  c) Sun's movement

📖 FILL IN THE BLANKS:
1. The _______ is the center of our solar system.
2. Earth takes _______ days to orbit the Sun.
3. The largest planet is _______.
4. _______ is known as the Red Planet.";

const ADVANCED_SHEET: &str = "ADVANCED LEVEL WORKSHEET - Solar System

🤔 HIGHER ORDER THINKING SKILLS (HOTS):
1. Why do you think life exists on Earth but not on other planets? Explain with 3 reasons.

2. If you were to design a new planet, what features would it need to support life?

3. Compare and contrast Earth and Mars. Create a Venn diagram.

📝 SHORT ANSWERS:
1. Explain the difference between rotation and revolution. (3-4 sentences)
2. Why do planets stay in their orbits around the Sun?
3. How would life on Earth change if there was no Moon?";

// =============================================================================
// STORYCRAFTER
// =============================================================================

#[must_use]
pub fn storyboard(req: &StoryRequest) -> Storyboard {
    let slides = STORY_SLIDES
        .iter()
        .map(|(title, content)| Slide { title: (*title).to_owned(), content: (*content).to_owned() })
        .collect();
    Storyboard { language: req.language, slides }
}

// =============================================================================
// SNAP2SHEET
// =============================================================================

#[must_use]
pub fn worksheets(req: &WorksheetRequest) -> WorksheetSet {
    let source = req.file.as_ref().map(|file| file.name.clone()).unwrap_or_default();
    let sheets = Tier::ALL
        .iter()
        .map(|&tier| TierSheet { tier, content: tier_sheet(tier).to_owned() })
        .collect();
    WorksheetSet { source, sheets }
}

fn tier_sheet(tier: Tier) -> &'static str {
    match tier {
        Tier::Beginner => BEGINNER_SHEET,
        Tier::Intermediate => INTERMEDIATE_SHEET,
        Tier::Advanced => ADVANCED_SHEET,
    }
}

// =============================================================================
// GYAANGENIE
// =============================================================================

/// Tamil and Bengali have no canned text yet and fall back to English.
#[must_use]
pub fn simplify(req: &SimplifyRequest) -> SimplifiedAnswer {
    let question = req.question.trim();
    let text = match req.language {
        Language::Marathi => marathi_answer(question),
        Language::Hindi => hindi_answer(question),
        Language::English | Language::Tamil | Language::Bengali => english_answer(question),
    };
    SimplifiedAnswer { language: req.language, text }
}

fn marathi_answer(question: &str) -> String {
    format!(
        "प्रश्न: \"{question}\"

🌟 सोपे उत्तर:
आकाश निळे दिसते कारण सूर्याच्या प्रकाशात सर्व रंग असतात. जेव्हा हा प्रकाश हवेतील छोट्या कणांना भेटतो, तेव्हा निळा रंग इतर रंगांपेक्षा जास्त पसरतो.

🏠 स्थानिक उदाहरण:
जसे आपण दुधात निळा रंग मिसळला तर संपूर्ण दूध निळे होते, तसेच आकाशातील निळा प्रकाश सर्वत्र पसरतो.

💡 मुख्य मुद्दे:
• सूर्याच्या प्रकाशात सात रंग असतात
• निळा रंग सर्वात जास्त पसरतो
• म्हणून आकाश निळे दिसते"
    )
}

fn hindi_answer(question: &str) -> String {
    format!(
        "प्रश्न: \"{question}\"

🌟 आसान जवाब:
आसमान नीला दिखता है क्योंकि सूरज की रोशनी में सभी रंग होते हैं। जब यह रोशनी हवा के छोटे कणों से टकराती है, तो नीला रंग दूसरे रंगों से ज्यादा फैलता है।

🏠 स्थानीय उदाहरण:
जैसे दूध में नीला रंग मिलाने से पूरा दूध नीला हो जाता है, वैसे ही आसमान में नीला प्रकाश हर जगह फैल जाता है।

💡 मुख्य बातें:
• सूरज के प्रकाश में सात रंग हैं
• नीला रंग सबसे ज्यादा फैलता है
• इसलिए आसमान नीला दिखता है"
    )
}

fn english_answer(question: &str) -> String {
    format!(
        "Question: \"{question}\"

🌟 Simple Answer:
The sky looks blue because sunlight contains all colors. When this light hits tiny particles in the air, blue light scatters more than other colors.

🏠 Local Example:
Just like when you mix blue color in milk, the whole milk becomes blue - similarly, blue light spreads everywhere in the sky.

💡 Key Points:
• Sunlight has seven colors
• Blue light scatters the most
• That's why the sky appears blue"
    )
}

// =============================================================================
// DIAGRAMGEN
// =============================================================================

#[must_use]
pub fn visual_aid(req: &VisualAidRequest) -> VisualAid {
    let [cloud, rain, river] = water_cycle_labels(req.language);
    let labels = vec![
        DiagramLabel { text: cloud.to_owned(), anchor: LabelAnchor::TopLeft },
        DiagramLabel { text: rain.to_owned(), anchor: LabelAnchor::MiddleRight },
        DiagramLabel { text: river.to_owned(), anchor: LabelAnchor::BottomCenter },
    ];
    VisualAid {
        image_url: VISUAL_AID_IMAGE_URL.to_owned(),
        labels,
        instructions: blackboard_instructions(req.prompt.trim(), req.complexity),
    }
}

fn water_cycle_labels(language: Language) -> [&'static str; 3] {
    match language {
        Language::English => ["Cloud", "Rain", "River"],
        Language::Hindi => ["बादल (Cloud)", "बारिश (Rain)", "नदी (River)"],
        Language::Marathi => ["ढग (Cloud)", "पाऊस (Rain)", "नदी (River)"],
        Language::Tamil => ["மேகம் (Cloud)", "மழை (Rain)", "ஆறு (River)"],
        Language::Bengali => ["মেঘ (Cloud)", "বৃষ্টি (Rain)", "নদী (River)"],
    }
}

fn blackboard_instructions(prompt: &str, complexity: Complexity) -> String {
    let mut text = format!(
        "🎨 VISUAL AID GENERATED: \"{prompt}\"

📋 BLACKBOARD DRAWING INSTRUCTIONS:

STEP 1: Draw the main structure
• Draw a large circle in the center (represents Earth)
• Add wavy lines above for \"atmosphere\"
• Draw the sun in top-left corner with rays

STEP 2: Add the water cycle elements
• Cloud at top-right: Draw fluffy cloud shape with cotton-like edges
• Rain drops: Draw 5-6 teardrop shapes falling from cloud
• River: Draw wavy line from bottom-left to right side of Earth
• Mountains: Draw 2-3 triangle shapes on left side

STEP 3: Add arrows and labels
• Arrow 1: From river to cloud (labeled \"EVAPORATION\")
• Arrow 2: From cloud to rain (labeled \"CONDENSATION\")
• Arrow 3: From rain to river (labeled \"PRECIPITATION\")
• Arrow 4: Curved arrow showing cycle continues

🎯 TEACHING TIPS:
• Use different colored chalk for each step
• Point to each part while explaining
• Have students trace the arrows with their finger"
    );
    if complexity == Complexity::Detailed {
        text.push_str(
            "

📐 BLACKBOARD SPACE NEEDED:
• Full blackboard width recommended
• Height: About 3/4 of blackboard
• Keep labels large enough for back row to read

🌟 STUDENT ACTIVITY:
Have students draw their own mini version in notebooks while you draw on blackboard!",
        );
    }
    text
}

// =============================================================================
// SMART EVALUATOR
// =============================================================================

#[must_use]
pub fn evaluate(req: &EvaluationRequest) -> EvaluationReport {
    let results = req
        .files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let mut rng = StdRng::seed_from_u64(sheet_seed(index, &file.name));
            let scored_marks = rng.random_range(MIN_SCORE..TOTAL_MARKS);
            let weak_count = rng.random_range(1..=WEAK_TOPICS.len());
            let weak_topics: Vec<String> = WEAK_TOPICS[..weak_count].iter().map(|t| (*t).to_owned()).collect();
            let recommendations = weak_topics.iter().filter_map(|topic| recommendation(topic)).collect();
            StudentResult {
                student_name: format!("Student {}", index + 1),
                file_name: file.name.clone(),
                total_marks: TOTAL_MARKS,
                scored_marks,
                percentage: scored_marks * 100 / TOTAL_MARKS,
                weak_topics,
                recommendations,
            }
        })
        .collect();
    EvaluationReport { results }
}

fn recommendation(topic: &str) -> Option<Recommendation> {
    let resources: &[&str] = match topic {
        "Algebra" => &[
            "https://www.khanacademy.org/math/algebra",
            "https://www.youtube.com/watch?v=algebra-basics",
        ],
        "Geometry" => &[
            "https://www.khanacademy.org/math/geometry",
            "https://www.youtube.com/watch?v=geometry-basics",
        ],
        _ => return None,
    };
    Some(Recommendation {
        topic: topic.to_owned(),
        resources: resources.iter().map(|url| (*url).to_owned()).collect(),
    })
}

/// FNV-1a over the file name, mixed with the sheet position.
fn sheet_seed(index: usize, name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    let hash = name
        .bytes()
        .fold(OFFSET, |acc, byte| (acc ^ u64::from(byte)).wrapping_mul(PRIME));
    hash ^ (index as u64).wrapping_mul(PRIME)
}
