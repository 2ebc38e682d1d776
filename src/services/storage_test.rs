use super::*;

// =============================================================================
// check_extension
// =============================================================================

#[test]
fn resumes_accept_pdf_and_word() {
    for name in ["cv.pdf", "cv.DOC", "Resume.Docx"] {
        assert!(check_extension(Bucket::Resumes, name).is_ok(), "{name}");
    }
}

#[test]
fn resumes_reject_images_and_bare_names() {
    assert!(matches!(
        check_extension(Bucket::Resumes, "cv.png"),
        Err(UploadError::UnsupportedType { bucket: "resumes", .. })
    ));
    assert!(check_extension(Bucket::Resumes, "cv").is_err());
}

#[test]
fn logos_accept_png_and_jpeg_only() {
    assert!(check_extension(Bucket::CompanyLogos, "logo.jpeg").is_ok());
    assert!(check_extension(Bucket::CompanyLogos, "logo.JPG").is_ok());
    assert!(check_extension(Bucket::CompanyLogos, "logo.svg").is_err());
}

// =============================================================================
// sanitize_file_name / object_key
// =============================================================================

#[test]
fn sanitize_replaces_unsafe_characters() {
    assert_eq!(sanitize_file_name("My Resume (final).pdf"), "My_Resume__final_.pdf");
}

#[test]
fn sanitize_drops_directories_and_leading_dots() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\Users\\me\\cv.docx"), "cv.docx");
    assert_eq!(sanitize_file_name(".hidden.pdf"), "hidden.pdf");
}

#[test]
fn sanitize_never_returns_empty() {
    assert_eq!(sanitize_file_name(""), "file");
    assert_eq!(sanitize_file_name("..."), "file");
}

#[test]
fn sanitize_caps_length() {
    let long = format!("{}.pdf", "a".repeat(300));
    assert_eq!(sanitize_file_name(&long).len(), 100);
}

#[test]
fn sanitize_keeps_extension_of_long_names() {
    let long = format!("{}.pdf", "a".repeat(116));
    let cleaned = sanitize_file_name(&long);
    assert_eq!(cleaned.len(), 100);
    assert!(cleaned.ends_with(".pdf"));
    assert!(check_extension(Bucket::Resumes, &cleaned).is_ok());

    let key = object_key(Bucket::Resumes, Uuid::nil(), &long);
    assert!(key.ends_with(".pdf"));
}

#[test]
fn sanitize_truncates_names_without_usable_extension() {
    let long = "b".repeat(150);
    assert_eq!(sanitize_file_name(&long), "b".repeat(100));
}

#[test]
fn object_key_is_bucket_scoped() {
    let id = Uuid::nil();
    assert_eq!(
        object_key(Bucket::CompanyLogos, id, "acme logo.png"),
        "company-logos/00000000-0000-0000-0000-000000000000-acme_logo.png"
    );
}

// =============================================================================
// save
// =============================================================================

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("hirehub-storage-{tag}-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn save_writes_file_and_returns_public_url() {
    let root = scratch_dir("ok");
    let url = save(&root, Bucket::Resumes, "cv.pdf", b"%PDF-1.7").await.unwrap();
    assert!(url.starts_with("/uploads/resumes/"));
    assert!(url.ends_with("-cv.pdf"));

    let key = url.trim_start_matches("/uploads/");
    let written = tokio::fs::read(root.join(key)).await.unwrap();
    assert_eq!(written, b"%PDF-1.7");
    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn save_rejects_empty_file() {
    let root = scratch_dir("empty");
    assert!(matches!(save(&root, Bucket::Resumes, "cv.pdf", b"").await, Err(UploadError::Empty)));
}

#[tokio::test]
async fn save_rejects_wrong_type_before_writing() {
    let root = scratch_dir("type");
    assert!(save(&root, Bucket::CompanyLogos, "logo.gif", b"GIF89a").await.is_err());
    assert!(!root.exists());
}

// =============================================================================
// local_path / remove
// =============================================================================

#[test]
fn local_path_maps_public_urls_under_root() {
    let root = std::path::Path::new("/srv/uploads");
    assert_eq!(
        local_path(root, "/uploads/resumes/x-cv.pdf"),
        Some(root.join("resumes/x-cv.pdf"))
    );
}

#[test]
fn local_path_rejects_foreign_and_escaping_urls() {
    let root = std::path::Path::new("/srv/uploads");
    assert_eq!(local_path(root, "/companies/acme.svg"), None);
    assert_eq!(local_path(root, "/uploads/../etc/passwd"), None);
    assert_eq!(local_path(root, "/uploads/"), None);
    assert_eq!(local_path(root, "/uploadsx/a.png"), None);
}

#[tokio::test]
async fn remove_deletes_a_saved_upload() {
    let root = scratch_dir("remove");
    let url = save(&root, Bucket::CompanyLogos, "logo.png", b"\x89PNG").await.unwrap();
    let path = local_path(&root, &url).unwrap();
    assert!(path.exists());

    remove(&root, &url).await;
    assert!(!path.exists());
    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn failed_insert_discards_the_upload() {
    let root = scratch_dir("discard");
    let url = save(&root, Bucket::CompanyLogos, "acme.png", b"\x89PNG").await.unwrap();
    let path = local_path(&root, &url).unwrap();

    let duplicate: Result<(), &str> = Err("duplicate company");
    assert!(discard_on_err(&root, &url, duplicate).await.is_err());
    assert!(!path.exists());
    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn successful_insert_keeps_the_upload() {
    let root = scratch_dir("keep");
    let url = save(&root, Bucket::Resumes, "cv.pdf", b"%PDF").await.unwrap();
    let path = local_path(&root, &url).unwrap();

    assert_eq!(discard_on_err(&root, &url, Ok::<_, ()>(7)).await, Ok(7));
    assert!(path.exists());
    let _ = tokio::fs::remove_dir_all(&root).await;
}
