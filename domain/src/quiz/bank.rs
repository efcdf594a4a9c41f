//! Built-in question bank
//!
//! Always-available questions used when the remote trivia source cannot be
//! reached, so a quiz can be played offline. Every tier is represented
//! deeply enough to fill a default ten-question quiz by weight.

use super::question::Category::{General, Planets, SpaceExploration, Stars};
use super::question::Difficulty::{Easy, Hard, Medium};
use super::question::{Category, Difficulty, QuizQuestion};

type Entry = (
    u64,
    &'static str,
    [&'static str; 4],
    &'static str,
    &'static str,
    Difficulty,
    Category,
);

const BANK: &[Entry] = &[
    (
        1,
        "Which planet is known as the 'Red Planet'?",
        ["Venus", "Mars", "Jupiter", "Mercury"],
        "Mars",
        "Mars appears red due to iron oxide (rust) on its surface.",
        Easy,
        Planets,
    ),
    (
        2,
        "What is the largest planet in our solar system?",
        ["Saturn", "Mars", "Jupiter", "Neptune"],
        "Jupiter",
        "Jupiter is the largest planet, with a mass more than twice that of all other planets combined.",
        Easy,
        Planets,
    ),
    (
        3,
        "What is the name of the galaxy we live in?",
        ["Andromeda", "Milky Way", "Triangulum", "Sombrero"],
        "Milky Way",
        "The Milky Way is our home galaxy, containing over 100 billion stars.",
        Easy,
        General,
    ),
    (
        4,
        "Who was the first human to walk on the Moon?",
        ["Buzz Aldrin", "Neil Armstrong", "Yuri Gagarin", "John Glenn"],
        "Neil Armstrong",
        "Neil Armstrong was the first person to walk on the Moon during the Apollo 11 mission in 1969.",
        Easy,
        SpaceExploration,
    ),
    (
        5,
        "What is the closest star to Earth (besides the Sun)?",
        ["Proxima Centauri", "Alpha Centauri A", "Sirius", "Betelgeuse"],
        "Proxima Centauri",
        "Proxima Centauri is the closest star to our Solar System, at about 4.2 light-years away.",
        Medium,
        Stars,
    ),
    (
        6,
        "What causes the phases of the Moon?",
        [
            "Earth's shadow",
            "The Moon's rotation speed",
            "The relative positions of the Sun, Earth, and Moon",
            "The Moon's varying distance from Earth",
        ],
        "The relative positions of the Sun, Earth, and Moon",
        "Moon phases occur due to how we see the sunlit portion of the Moon as it orbits Earth.",
        Medium,
        General,
    ),
    (
        7,
        "How many planets are in our solar system?",
        ["7", "8", "9", "10"],
        "8",
        "Since Pluto was reclassified as a dwarf planet in 2006, the Solar System has eight planets.",
        Easy,
        Planets,
    ),
    (
        8,
        "Which is the hottest planet in our solar system?",
        ["Mercury", "Venus", "Mars", "Jupiter"],
        "Venus",
        "Venus's thick carbon dioxide atmosphere traps heat, making it hotter than Mercury.",
        Medium,
        Planets,
    ),
    (
        9,
        "What is the name of the force that keeps planets in orbit?",
        ["Magnetic Force", "Nuclear Force", "Gravity", "Centrifugal Force"],
        "Gravity",
        "The Sun's gravity continuously bends each planet's path into an orbit.",
        Easy,
        General,
    ),
    (
        10,
        "What causes the seasons on Earth?",
        [
            "Earth's distance from the Sun",
            "Earth's tilt on its axis",
            "The Moon's gravity",
            "Solar winds",
        ],
        "Earth's tilt on its axis",
        "Earth's 23.5° axial tilt changes how directly sunlight strikes each hemisphere through the year.",
        Medium,
        General,
    ),
    (
        11,
        "What is a black hole?",
        [
            "A dead star",
            "An empty region of space",
            "A region where gravity is so strong nothing can escape",
            "A hole in the ozone layer",
        ],
        "A region where gravity is so strong nothing can escape",
        "Not even light can escape once it crosses a black hole's event horizon.",
        Medium,
        Stars,
    ),
    (
        12,
        "What is the Great Red Spot on Jupiter?",
        ["A volcano", "A giant storm", "A crater", "A lake of red liquid"],
        "A giant storm",
        "The Great Red Spot is an anticyclonic storm larger than Earth that has raged for centuries.",
        Medium,
        Planets,
    ),
    (
        13,
        "Which space mission first landed humans on the Moon?",
        ["Apollo 10", "Apollo 11", "Apollo 12", "Apollo 13"],
        "Apollo 11",
        "Apollo 11 landed on the Moon on July 20, 1969.",
        Easy,
        SpaceExploration,
    ),
    (
        14,
        "What is the Sun primarily made of?",
        ["Liquid lava", "Molten iron", "Hydrogen and Helium", "Rocks and metals"],
        "Hydrogen and Helium",
        "By mass the Sun is roughly 73% hydrogen and 25% helium.",
        Easy,
        Stars,
    ),
    (
        15,
        "What is the name of the force field that protects Earth from solar winds?",
        ["Ozone layer", "Magnetosphere", "Atmosphere", "Ionosphere"],
        "Magnetosphere",
        "Earth's magnetic field deflects most of the charged particles streaming from the Sun.",
        Medium,
        General,
    ),
    (
        16,
        "As of 2023, which planet has the most confirmed moons?",
        ["Saturn", "Jupiter", "Uranus", "Neptune"],
        "Saturn",
        "Saturn overtook Jupiter in 2023 with 146 confirmed moons.",
        Hard,
        Planets,
    ),
    (
        17,
        "What is a light year?",
        [
            "The time it takes light to travel in a year",
            "The distance light travels in a year",
            "The speed of light",
            "The brightness of a star",
        ],
        "The distance light travels in a year",
        "A light year is a distance of about 9.46 trillion kilometres.",
        Easy,
        General,
    ),
    (
        18,
        "What is the name of Mars' largest moon?",
        ["Phobos", "Deimos", "Titan", "Europa"],
        "Phobos",
        "Phobos is the larger and inner of Mars' two small moons.",
        Medium,
        Planets,
    ),
    (
        19,
        "What is the asteroid belt?",
        [
            "A ring around Saturn",
            "A region between Mars and Jupiter",
            "A belt around Earth",
            "A region beyond Pluto",
        ],
        "A region between Mars and Jupiter",
        "The main asteroid belt lies between the orbits of Mars and Jupiter.",
        Easy,
        General,
    ),
    (
        98,
        "What is a pulsar?",
        [
            "A dying star",
            "A rotating neutron star",
            "A black hole",
            "A type of galaxy",
        ],
        "A rotating neutron star",
        "A pulsar is a highly magnetized, rotating neutron star that emits beams of electromagnetic radiation from its poles.",
        Hard,
        Stars,
    ),
    (
        99,
        "What is dark energy?",
        [
            "A type of black hole",
            "The force that powers stars",
            "The hypothetical force causing universe expansion",
            "The energy inside atoms",
        ],
        "The hypothetical force causing universe expansion",
        "Dark energy is a hypothetical form of energy that is thought to permeate all of space and tend to accelerate the expansion of the universe.",
        Hard,
        General,
    ),
    (
        100,
        "What is the largest known star in the observable universe?",
        ["UY Scuti", "VY Canis Majoris", "Betelgeuse", "Antares"],
        "UY Scuti",
        "UY Scuti is currently the largest known star with a radius about 1,700 times that of the Sun.",
        Hard,
        Stars,
    ),
    (
        101,
        "What is the boundary around a black hole beyond which nothing can escape?",
        ["Photon sphere", "Event horizon", "Ergosphere", "Accretion disk"],
        "Event horizon",
        "Inside the event horizon the escape velocity exceeds the speed of light.",
        Hard,
        Stars,
    ),
    (
        102,
        "Which spacecraft was the first to cross the heliopause into interstellar space?",
        ["Voyager 2", "Pioneer 10", "New Horizons", "Voyager 1"],
        "Voyager 1",
        "Voyager 1 crossed the heliopause in August 2012.",
        Hard,
        SpaceExploration,
    ),
    (
        103,
        "What is the Chandrasekhar limit?",
        [
            "The minimum mass needed to form a star",
            "The maximum mass of a stable white dwarf",
            "The radius of a neutron star",
            "The distance at which tides tear a moon apart",
        ],
        "The maximum mass of a stable white dwarf",
        "Above roughly 1.4 solar masses electron degeneracy pressure can no longer support a white dwarf.",
        Hard,
        Stars,
    ),
];

/// The built-in question bank
pub fn builtin_questions() -> Vec<QuizQuestion> {
    BANK.iter()
        .map(
            |&(id, question, options, correct, explanation, difficulty, category)| QuizQuestion {
                id,
                question: question.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                correct_answer: correct.to_string(),
                explanation: explanation.to_string(),
                difficulty,
                category,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::sampler::DifficultyWeights;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_passes_validation() {
        for q in builtin_questions() {
            let rebuilt = QuizQuestion::try_new(
                q.id,
                q.question.clone(),
                q.options.clone(),
                q.correct_answer.clone(),
                q.difficulty,
                q.category,
            );
            assert!(rebuilt.is_ok(), "question {} is invalid: {:?}", q.id, rebuilt);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let questions = builtin_questions();
        let ids: HashSet<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_each_tier_can_fill_default_quiz() {
        let questions = builtin_questions();
        let weights = DifficultyWeights::default();
        for difficulty in Difficulty::ALL {
            let available = questions.iter().filter(|q| q.difficulty == difficulty).count();
            assert!(
                available >= weights.target_count(difficulty, 10),
                "{} tier has only {}",
                difficulty,
                available
            );
        }
    }
}
