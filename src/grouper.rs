//! Record grouping: physical lines to logical records.
use std::collections::HashMap;
use std::hash::Hash;

/// Groups raw deck lines by a key derived from each line's own text,
/// preserving first-seen key order. Several physical lines may describe
/// one logical record (one per wind radii threshold). Keys are raw field
/// text on purpose: a line whose key field is malformed forms its own
/// group and fails at decode, it cannot join an unrelated record.
pub(crate) fn group_records<K, F>(lines: Vec<String>, key_of: F) -> Vec<(K, Vec<String>)>
where
    K: Clone + Eq + Hash,
    F: Fn(&str) -> K,
{
    let mut groups: Vec<(K, Vec<String>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    for line in lines {
        let key = key_of(&line);
        match index.get(&key) {
            Some(&position) => groups[position].1.push(line),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![line]));
            },
        }
    }
    groups
}

#[cfg(test)]
mod test {
    use super::*;
    fn lines(content: &[&str]) -> Vec<String> {
        content.iter().map(|s| s.to_string()).collect()
    }
    #[test]
    fn first_seen_order() {
        let grouped = group_records(lines(&["b 1", "a 2", "b 3", "c 4", "a 5"]), |line| {
            line.split(' ').next().unwrap_or("").to_string()
        });
        let keys: Vec<&str> = grouped.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(grouped[0].1, lines(&["b 1", "b 3"]));
        assert_eq!(grouped[1].1, lines(&["a 2", "a 5"]));
        assert_eq!(grouped[2].1, lines(&["c 4"]));
    }
    #[test]
    fn tuple_keys() {
        let grouped = group_records(lines(&["x,1", "x,2", "y,1"]), |line| {
            let mut fields = line.split(',');
            (
                fields.next().unwrap_or("").to_string(),
                fields.next().unwrap_or("").to_string(),
            )
        });
        assert_eq!(grouped.len(), 3, "distinct keys must not merge");
    }
}
