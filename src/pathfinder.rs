use std::collections::{HashMap, HashSet, VecDeque};
use url::Url;

/// Find the shortest path between two URLs using BFS over the recorded
/// edges. The result is shortest only within the graph as it stood when the
/// crawl stopped; ties between equally short routes fall to neighbor
/// iteration order, which is unspecified.
pub fn find_shortest_path(
    start: &Url,
    target: &Url,
    graph: &HashMap<Url, HashSet<Url>>,
) -> Option<Vec<Url>> {
    use log2::debug;

    debug!("Searching for path from {} to {}", start, target);
    debug!("Graph contains {} nodes", graph.len());

    if start == target {
        return Some(vec![start.clone()]);
    }

    if !graph.contains_key(start) {
        debug!("Start URL not found in graph");
        return None;
    }

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parent: HashMap<Url, Url> = HashMap::new();

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = graph.get(&current) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    parent.insert(neighbor.clone(), current.clone());
                    queue.push_back(neighbor.clone());

                    if neighbor == target {
                        let mut path = Vec::new();
                        let mut node = target.clone();

                        while let Some(prev) = parent.get(&node) {
                            path.push(node.clone());
                            node = prev.clone();
                        }
                        path.push(start.clone());
                        path.reverse();

                        debug!("Found target, path has {} hops", path.len() - 1);
                        return Some(path);
                    }
                }
            }
        }
    }

    debug!("No path found after searching {} nodes", visited.len());
    None
}

/// Print the path in a readable format
pub fn print_path(path: &[Url]) {
    if path.is_empty() {
        return;
    }

    println!("Shortest path ({} steps):", path.len() - 1);
    for (i, url) in path.iter().enumerate() {
        if i == 0 {
            println!("  START: {}", url);
        } else if i == path.len() - 1 {
            println!("  END:   {}", url);
        } else {
            println!("  {}:     {}", i, url);
        }
    }
}
