/// Borne un numéro de semaine demandé dans `[1, weeks]`.
///
/// Un planning vide renvoie 1 : le pointeur reste sur une valeur sûre.
pub fn go_to_week(requested: i64, weeks: usize) -> usize {
    if weeks == 0 {
        return 1;
    }
    if requested < 1 {
        1
    } else if requested as usize > weeks {
        weeks
    } else {
        requested as usize
    }
}
