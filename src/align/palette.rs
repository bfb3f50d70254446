pub const FALLBACK_COLOR: &str = "#ddd";

const ENTITY_COLORS: &[(&str, &str)] = &[
    ("PER", "#a6e22d"),
    ("ORG", "#ff7f0e"),
    ("LOC", "#1f77b4"),
    ("FAC", "#d62728"),
    ("GPE", "#FFFF00"),
    ("PRODUCT", "#9467bd"),
    ("EVENT", "#bcbd22"),
    ("WORK_OF_ART", "#17becf"),
    ("LAW", "#8c564b"),
    ("LANGUAGE", "#e377c2"),
    ("DATE", "#2ca02c"),
    ("TIME", "#1c9099"),
    ("PERCENT", "#7f7f7f"),
    ("MONEY", "#ff1493"),
    ("QUANTITY", "#aec7e8"),
    ("ORDINAL", "#ffbb78"),
    ("CARDINAL", "#98df8a"),
    ("NORP", "#c49c94"),
    ("VALUE", "#c5b0d5"),
];

const EVENT_TYPE_COLORS: &[(&str, &str)] = &[
    ("Life:Die", "#e6194B"),
    ("Movement:Transport", "#3cb44b"),
    ("Transaction:Transfer-Money", "#ffe119"),
    ("Conflict:Attack", "#4363d8"),
    ("Conflict:Demonstrate", "#f58231"),
    ("Contact:Meet", "#911eb4"),
    ("Contact:Phone-Write", "#46f0f0"),
    ("Justice:Arrest-Jail", "#f032e6"),
];

pub fn color_for(label: &str) -> &'static str {
    ENTITY_COLORS
        .iter()
        .chain(EVENT_TYPE_COLORS)
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
