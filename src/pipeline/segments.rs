//! Voice-Over Segment Heuristic
//!
//! Derives ordered sub-scripts from one generated voice-over script. Lines
//! opening with a "Segment N" marker start a new segment; other lines
//! accrete to the current one. The fallback never yields fewer than one
//! element: if no marker is found, the whole script is the single segment.
//! A count mismatch against the expected segment total is logged at warn so
//! degraded splits are visible rather than silent.

use tracing::warn;

/// Split a voice-over script into its timed segments.
pub fn split_voice_over_segments(script: &str, expected: usize) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in script.lines() {
        if line.trim().to_lowercase().starts_with("segment") {
            if !current.trim().is_empty() {
                segments.push(current.trim().to_string());
            }
            // Keep only the text after the marker's colon, if any.
            current = line
                .splitn(2, ':')
                .nth(1)
                .unwrap_or("")
                .to_string();
        } else {
            current.push(' ');
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        segments.push(current.trim().to_string());
    }

    if segments.is_empty() {
        warn!(expected, "No segment markers found in script; using it whole");
        return vec![script.trim().to_string()];
    }

    if segments.len() != expected {
        warn!(
            found = segments.len(),
            expected, "Script segment count differs from the duration package"
        );
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_segment_markers() {
        let script = "Segment 1: మొదటి లైన్\nమరింత టెక్స్ట్\nSegment 2: రెండవ లైన్";
        let segments = split_voice_over_segments(script, 2);

        assert_eq!(segments.len(), 2);
        assert!(segments[0].contains("మొదటి లైన్"));
        assert!(segments[0].contains("మరింత టెక్స్ట్"));
        assert_eq!(segments[1], "రెండవ లైన్");
    }

    #[test]
    fn test_marker_matching_is_case_insensitive() {
        let script = "SEGMENT 1: first\nsegment 2: second";
        assert_eq!(split_voice_over_segments(script, 2).len(), 2);
    }

    #[test]
    fn test_no_markers_falls_back_to_whole_script() {
        let script = "ఒకే పేరాగ్రాఫ్ స్క్రిప్ట్, మార్కర్లు లేవు.";
        let segments = split_voice_over_segments(script, 4);

        assert_eq!(segments, vec![script.to_string()]);
    }

    #[test]
    fn test_never_fewer_than_one_element() {
        assert_eq!(split_voice_over_segments("", 2).len(), 1);
        assert_eq!(split_voice_over_segments("   \n  ", 2).len(), 1);
    }

    #[test]
    fn test_marker_without_colon_starts_fresh_segment() {
        let script = "Segment 1\nbody text\nSegment 2\nmore body";
        let segments = split_voice_over_segments(script, 2);

        assert_eq!(segments, vec!["body text", "more body"]);
    }
}
