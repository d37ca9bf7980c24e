//! A small library of ready-made L-systems. Static data only; load one into a
//! [`crate::config::LSystemConfig`] with [`crate::config::LSystemConfig::load_preset`].

/// A complete, named L-system configuration. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [&'static str],
    pub draw: &'static str,
    pub skip: &'static str,
    pub turn_left: &'static str,
    pub turn_right: &'static str,
    pub angle_increment: f64,
    pub starting_angle: f64,
    pub iterations: u32,
}

/// The preset selected when a viewer starts up.
pub const DEFAULT_PRESET: &str = "Fractal plant";

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "Quadratic Koch island",
        axiom: "F-F-F-F",
        rules: &["F -> F - F + F + F F - F - F + F"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 2,
    },
    Preset {
        name: "Pythagoras tree",
        axiom: "0",
        rules: &["1 -> 11", "0 -> 1[+0]-0"],
        draw: "01",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 45.0,
        starting_angle: 0.0,
        iterations: 5,
    },
    Preset {
        name: "Koch curve",
        axiom: "F",
        rules: &["F -> F+F-F-F+F"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 5,
    },
    Preset {
        name: "Sierpinski triangle",
        axiom: "A",
        rules: &["A -> +B-A-B+", "B -> -A+B+A-"],
        draw: "AB",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 60.0,
        starting_angle: 0.0,
        iterations: 5,
    },
    Preset {
        name: "Dragon curve",
        axiom: "FX",
        rules: &["X -> X+YF+", "Y -> -FX-Y"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 5,
    },
    Preset {
        name: "Fractal plant",
        axiom: "X",
        rules: &["X -> F-[[X]+X]+F[+FX]-X", "F -> FF"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 25.0,
        starting_angle: -25.0,
        iterations: 6,
    },
    Preset {
        name: "Fractal bushy thing",
        axiom: "F",
        rules: &["F -> FF-[-F+F+F]+[+F-F-F]"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 22.5,
        starting_angle: 0.0,
        iterations: 4,
    },
    Preset {
        name: "Another plant",
        axiom: "F",
        rules: &["F -> F[+F]F[-F][F]"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 20.0,
        starting_angle: 0.0,
        iterations: 5,
    },
    Preset {
        name: "FASS example",
        axiom: "-L",
        rules: &[
            "L->LF+RFR+FL-F-LFLFL-FRFR+",
            "R->-LFLF+RFRFR+F+RF-LFL-FR",
        ],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 3,
    },
    Preset {
        name: "Island and lakes",
        axiom: "F+F+F+F",
        rules: &[
            "F -> F+f-FF+F+FF+Ff+FF-f+FF-F-FF-Ff-FFF",
            "f -> fffffff",
        ],
        draw: "F",
        skip: "f",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 2,
    },
    Preset {
        name: "Round Koch curve",
        axiom: "F-F-F-F",
        rules: &["F -> FF-F-F-F-F-F+F"],
        draw: "F",
        skip: "",
        turn_left: "+",
        turn_right: "-",
        angle_increment: 90.0,
        starting_angle: 0.0,
        iterations: 4,
    },
];

/// Looks a preset up by its exact name.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}
