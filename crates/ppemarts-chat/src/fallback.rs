//! Canned keyword replies used when no completion service answers.
//!
//! Matching is first-hit in declaration order over a lower-cased substring
//! search. Because "glove" is declared before "chemical glove", the latter
//! can never win; the order is kept as shipped so replies stay reproducible.

/// Reply used when no keyword matches.
pub const DEFAULT_REPLY: &str = "I'm here to help with PPE safety! I can assist with product selection, safety regulations, hazard assessments, and proper usage guidelines. Please ask about specific equipment or safety scenarios.";

static REPLIES: &[(&str, &str)] = &[
    (
        "construction",
        "For construction work, OSHA requires: hard hat (ANSI Z89.1), safety glasses, high-vis vest, steel-toe boots (ASTM F2413), and gloves. Additional PPE needed for specific tasks: hearing protection for loud areas, respirators for dust, fall protection for heights over 6 feet.",
    ),
    (
        "hard hat",
        "Hard hats must be ANSI Z89.1 certified. Types: Class G (general, 2,200V), Class E (electrical, 20,000V), Class C (conductive, no voltage protection). Replace after any significant impact or every 5 years.",
    ),
    (
        "glove",
        "Select gloves based on hazard: Chemical - nitrile/rubber, Cut - Kevlar/metal mesh, Heat - aluminized/leather, Cold - insulated, General - leather/canvas. Ensure proper fit and dexterity.",
    ),
    (
        "chemical glove",
        "For chemical protection: Nitrile for oils/solvents, Butyl rubber for ketones/esters, Neoprene for acids/alcohols, Viton for chlorinated/aromatic solvents. Check chemical compatibility charts.",
    ),
    (
        "respirator",
        "Respirator types: N95 for particles, half-face for gases/vapors with cartridges, full-face for eye/respiratory combo, PAPR for comfort in extended use. Fit testing required annually.",
    ),
    (
        "mask",
        "Mask types: Surgical - fluid resistance, N95 - 95% particle filtration, KN95 - Chinese standard, FFP2 - European standard. Ensure proper seal and replace when damaged/soiled.",
    ),
    (
        "fall",
        "Fall protection system: Full-body harness, shock-absorbing lanyard (6 ft max), anchor point (5,000 lb rating), rescue plan. Inspect before each use. OSHA requires training.",
    ),
    (
        "harness",
        "Harness features: Dorsal D-ring for fall arrest, shoulder D-rings for retrieval, side D-rings for positioning, chest D-ring for ladder climbing. Fit: 1-2 fingers between leg straps and thighs.",
    ),
    (
        "safety shoe",
        "Safety shoe standards: ASTM F2413 for impact/compression, EH for electrical hazard, SD for static dissipative, PR for puncture resistant. Match to workplace hazards.",
    ),
    (
        "goggle",
        "Eye protection: Safety glasses for impact, goggles for chemical splash, face shields for face/eye combo, welding helmets for arc flash. ANSI Z87.1 certification required.",
    ),
    (
        "osha",
        "Key OSHA PPE standards: 1910.132 (General Requirements), 1910.133 (Eye/Face), 1910.134 (Respiratory), 1910.135 (Head), 1910.136 (Foot), 1910.137 (Electrical), 1910.138 (Hand).",
    ),
    (
        "regulation",
        "PPE regulations vary by: Industry (construction, healthcare, manufacturing), Country (OSHA-US, CE-Europe), Hazard type. Always consult local regulations and conduct hazard assessments.",
    ),
];

/// Keyword-driven reply selector.
#[derive(Debug, Clone, Copy)]
pub struct FallbackResponder {
    replies: &'static [(&'static str, &'static str)],
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self { replies: REPLIES }
    }
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first keyword contained in `message`, if any.
    pub fn matched_keyword(&self, message: &str) -> Option<&'static str> {
        let lowered = message.to_lowercase();
        self.replies
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(keyword, _)| *keyword)
    }

    /// Canned reply for `message`.
    pub fn reply(&self, message: &str) -> &'static str {
        let lowered = message.to_lowercase();
        self.replies
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, reply)| *reply)
            .unwrap_or(DEFAULT_REPLY)
    }

    /// Keywords in match order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.replies.iter().map(|(keyword, _)| *keyword)
    }
}
