//! Integration tests for the public embedding API

use embed_header::encode::decode_tokens;
use embed_header::header::extract_array_bytes;
use embed_header::identifier::identifier_from_path;
use embed_header::{embed_file, embed_slice, EmbedTarget, HeaderLayout};
use std::path::Path;

fn array_lines(document: &str) -> Vec<&str> {
    document
        .lines()
        .skip_while(|line| !line.ends_with("[] = {"))
        .skip(1)
        .take_while(|line| line.trim() != "};")
        .collect()
}

#[test]
fn test_two_byte_example() {
    let header = embed_slice(
        b"AB",
        &EmbedTarget::new("shaders", "vertex_src"),
        &HeaderLayout::new(),
    );

    assert_eq!(array_lines(&header), vec!["        0x41, 0x42, 0x00"]);
    assert!(header.starts_with("#pragma once\n#include <cstddef>\n\nnamespace shaders {\n"));
    assert!(header.ends_with(
        "    constexpr size_t vertex_src_len = sizeof(vertex_src) - 1;\n}\n"
    ));
}

#[test]
fn test_every_size_up_to_three_lines() {
    let target = EmbedTarget::new("assets", "blob");
    for len in 0..=48usize {
        let input: Vec<u8> = (0..len).map(|i| (255 - i) as u8).collect();
        let header = embed_slice(&input, &target, &HeaderLayout::new());
        let lines = array_lines(&header);

        let tokens: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        assert_eq!(tokens.len(), len + 1, "token count for {len} bytes");
        assert_eq!(*tokens.last().unwrap(), "0x00");

        let (last, full) = lines.split_last().unwrap();
        assert!(full.iter().all(|line| line.ends_with(',')));
        assert!(full.iter().all(|line| line.split(", ").count() == 16));
        assert!(!last.ends_with(','));
        assert!(last.split(", ").count() <= 16);

        let mut decoded = decode_tokens(&lines.join("\n")).unwrap();
        decoded.pop();
        assert_eq!(decoded, input);
    }
}

#[test]
fn test_file_roundtrip_through_generated_header() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("shaders/pass001_init_kmeans.wgsl");
    std::fs::create_dir_all(input_path.parent().unwrap()).unwrap();
    let shader = b"@compute @workgroup_size(64)\nfn main() {}\n";
    std::fs::write(&input_path, shader).unwrap();

    let variable = identifier_from_path(Path::new("shaders/pass001_init_kmeans.wgsl"));
    let output_path = dir.path().join("build/generated/shaders.h");
    let report = embed_file(
        &input_path,
        &output_path,
        &EmbedTarget::new("Shaders", &variable),
        &HeaderLayout::new(),
    )
    .expect("embedding should succeed");

    let header = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(report.input_len, shader.len());
    assert!(header.contains("constexpr unsigned char shaders_pass001_init_kmeans_wgsl[] = {"));
    assert_eq!(extract_array_bytes(&header).unwrap(), shader);
}
