//! Hand-curated city relations.
//!
//! These relations are cities but are tagged in a way the tag rules cannot
//! pick up (see komoot/photon#138). The table is static reference data.

/// Relation ids known to be cities. Must stay sorted ascending.
pub const CURATED_CITY_RELATION_IDS: [i64; 107] = [
    27021, 27027, 62340, 62347, 62349, 62352, 62369, 62370, 62374, 62381, 62385, 62391,
    62396, 62400, 62403, 62405, 62407, 62409, 62410, 62411, 62414, 62418, 62422, 62428,
    62430, 62444, 62449, 62450, 62453, 62455, 62456, 62464, 62470, 62471, 62478, 62481,
    62484, 62493, 62495, 62496, 62499, 62508, 62512, 62518, 62522, 62523, 62525, 62526,
    62528, 62531, 62532, 62534, 62539, 62554, 62559, 62562, 62573, 62578, 62581, 62589,
    62590, 62591, 62594, 62598, 62629, 62630, 62631, 62634, 62636, 62638, 62640, 62642,
    62644, 62646, 62649, 62652, 62654, 62658, 62659, 62671, 62675, 62685, 62691, 62693,
    62695, 62699, 62701, 62713, 62717, 62719, 62720, 62724, 62734, 62745, 62748, 62751,
    62768, 62772, 62780, 62782, 172679, 191645, 285864, 1800297, 1829065, 2168233, 2793104,
];

/// Whether `relation_id` is one of the curated city relations
pub fn is_curated_city_relation(relation_id: i64) -> bool {
    CURATED_CITY_RELATION_IDS
        .binary_search(&relation_id)
        .is_ok()
}
