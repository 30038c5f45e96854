use std::fs;

use qingping::{commands, Site};

#[tokio::test]
async fn test_export_then_clean() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(content.join("blogs")).unwrap();
    fs::write(
        content.join("authors.json"),
        r#"{"authors": [{"id": "u1", "name": "Alice", "bio": "Watches ponds."}]}"#,
    )
    .unwrap();
    fs::write(
        content.join("blogs/index.json"),
        r#"{"posts": [{"id": "a1", "title": "Hello", "date": "2024-01-01",
            "authorId": "u1", "authorName": "Alice", "fileName": "hello.md"}]}"#,
    )
    .unwrap();
    fs::write(content.join("blogs/hello.md"), "# Hello\n\nBody text.\n").unwrap();

    let site = Site::new(dir.path()).unwrap();
    commands::export::run(&site).await.unwrap();

    let public = dir.path().join("public");
    for page in [
        "index.html",
        "about/index.html",
        "blog/index.html",
        "authors/index.html",
        "blog/post/a1/index.html",
        "author/u1/index.html",
        "404.html",
        "content/blogs/hello.md",
    ] {
        assert!(public.join(page).is_file(), "{} missing", page);
    }

    let post = fs::read_to_string(public.join("blog/post/a1/index.html")).unwrap();
    assert!(post.contains("Body text."));
    assert!(post.contains(r#"data-transition-key="/blog/post/a1""#));

    commands::clean::run(&site).unwrap();
    assert!(!public.exists());
}

#[tokio::test]
async fn test_check_fails_on_dangling_author() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(content.join("blogs")).unwrap();
    fs::write(content.join("authors.json"), r#"{"authors": []}"#).unwrap();
    fs::write(
        content.join("blogs/index.json"),
        r#"{"posts": [{"id": "a1", "title": "Hello", "date": "2024-01-01",
            "authorId": "ghost", "fileName": "hello.md"}]}"#,
    )
    .unwrap();
    fs::write(content.join("blogs/hello.md"), "# Hello\n").unwrap();

    let site = Site::new(dir.path()).unwrap();
    let err = commands::check::run(&site).await.unwrap_err();
    assert!(err.to_string().contains("1 errors"));
}
