use syncin_core::{
    EditTarget, IdAllocator, IdKind, NotebookColor, WorkspaceService,
};

fn setup() -> (WorkspaceService, IdAllocator) {
    (WorkspaceService::new(), IdAllocator::new())
}

#[test]
fn notebook_ids_are_strictly_increasing_from_one() {
    let (mut workspace, mut ids) = setup();

    let drawn: Vec<_> = (0..5).map(|_| workspace.add_notebook(&mut ids)).collect();
    assert_eq!(drawn, vec![1, 2, 3, 4, 5]);

    let stored: Vec<_> = workspace
        .notebooks()
        .iter()
        .map(|notebook| notebook.id)
        .collect();
    assert_eq!(stored, drawn);

    for notebook in workspace.notebooks() {
        assert!(NotebookColor::ALL.contains(&notebook.color));
        assert_eq!(notebook.name, format!("Notebook {}", notebook.id));
        assert!(!workspace.is_expanded(notebook.id));
    }
}

#[test]
fn id_spaces_are_independent() {
    let (mut workspace, mut ids) = setup();

    let notebook_id = workspace.add_notebook(&mut ids);
    let section_id = workspace.add_section(&mut ids, notebook_id).unwrap();
    assert_eq!(notebook_id, 1);
    assert_eq!(section_id, 1);
    assert_eq!(ids.next(IdKind::Page), 1);
}

#[test]
fn add_section_miss_leaves_the_collection_unchanged() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);
    workspace.add_section(&mut ids, notebook_id);
    let before = workspace.notebooks().to_vec();

    assert_eq!(workspace.add_section(&mut ids, 99), None);
    assert_eq!(workspace.notebooks(), before.as_slice());
}

#[test]
fn add_section_miss_still_spends_the_drawn_id() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);

    assert_eq!(workspace.add_section(&mut ids, 99), None);
    assert_eq!(workspace.add_section(&mut ids, notebook_id), Some(2));
}

#[test]
fn notebook_with_two_sections_end_to_end() {
    let (mut workspace, mut ids) = setup();

    let notebook_id = workspace.add_notebook(&mut ids);
    workspace.add_section(&mut ids, notebook_id);
    workspace.add_section(&mut ids, notebook_id);

    let notebook = workspace.notebook(notebook_id).unwrap();
    assert_eq!(notebook.id, 1);
    assert_eq!(notebook.sections.len(), 2);
    assert_eq!(notebook.sections[0].id, 1);
    assert_eq!(notebook.sections[0].name, "Section 1");
    assert_eq!(notebook.sections[1].id, 2);
    assert_eq!(notebook.sections[1].name, "Section 2");
}

#[test]
fn rename_notebook_to_empty_string_sticks() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);

    workspace.rename_notebook(notebook_id, "");
    assert_eq!(workspace.notebook(notebook_id).unwrap().name, "");
}

#[test]
fn rename_closes_the_inline_editor_even_on_a_miss() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);

    workspace.begin_edit(EditTarget::Notebook(notebook_id));
    workspace.rename_notebook(99, "ghost");
    assert_eq!(workspace.editing(), None);
    assert_eq!(
        workspace.notebook(notebook_id).unwrap().name,
        "Notebook 1"
    );
}

#[test]
fn rename_section_replaces_the_name_verbatim() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);
    let section_id = workspace.add_section(&mut ids, notebook_id).unwrap();

    workspace.begin_edit(EditTarget::Section {
        notebook_id,
        section_id,
    });
    workspace.rename_section(notebook_id, section_id, "  Meeting notes  ");

    let notebook = workspace.notebook(notebook_id).unwrap();
    assert_eq!(notebook.section(section_id).unwrap().name, "  Meeting notes  ");
    assert_eq!(workspace.editing(), None);
}

#[test]
fn toggle_expanded_is_its_own_inverse() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);

    workspace.toggle_expanded(notebook_id);
    assert!(workspace.is_expanded(notebook_id));
    workspace.toggle_expanded(notebook_id);
    assert!(!workspace.is_expanded(notebook_id));
}

#[test]
fn color_picker_is_single_open_and_closes_on_recolor() {
    let (mut workspace, mut ids) = setup();
    let first = workspace.add_notebook(&mut ids);
    let second = workspace.add_notebook(&mut ids);

    workspace.toggle_color_picker(first);
    assert_eq!(workspace.color_picker(), Some(first));

    workspace.toggle_color_picker(second);
    assert_eq!(workspace.color_picker(), Some(second));

    workspace.change_notebook_color(second, NotebookColor::Green);
    assert_eq!(workspace.color_picker(), None);
    assert_eq!(
        workspace.notebook(second).unwrap().color,
        NotebookColor::Green
    );
}

#[test]
fn toggle_color_picker_twice_closes_it() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);

    workspace.toggle_color_picker(notebook_id);
    workspace.toggle_color_picker(notebook_id);
    assert_eq!(workspace.color_picker(), None);
}

#[test]
fn inline_editor_is_single_open_across_targets() {
    let (mut workspace, mut ids) = setup();
    let notebook_id = workspace.add_notebook(&mut ids);
    let section_id = workspace.add_section(&mut ids, notebook_id).unwrap();

    workspace.begin_edit(EditTarget::Notebook(notebook_id));
    workspace.begin_edit(EditTarget::Section {
        notebook_id,
        section_id,
    });
    assert_eq!(
        workspace.editing(),
        Some(EditTarget::Section {
            notebook_id,
            section_id,
        })
    );

    workspace.end_edit();
    assert_eq!(workspace.editing(), None);
}

#[test]
fn mutations_never_reorder_existing_siblings() {
    let (mut workspace, mut ids) = setup();
    let first = workspace.add_notebook(&mut ids);
    let second = workspace.add_notebook(&mut ids);
    workspace.add_section(&mut ids, first);
    workspace.add_section(&mut ids, first);

    workspace.rename_notebook(second, "Renamed");
    workspace.change_notebook_color(first, NotebookColor::Red);
    workspace.rename_section(first, 1, "First");

    let order: Vec<_> = workspace
        .notebooks()
        .iter()
        .map(|notebook| notebook.id)
        .collect();
    assert_eq!(order, vec![first, second]);

    let sections: Vec<_> = workspace.notebook(first).unwrap()
        .sections
        .iter()
        .map(|section| section.id)
        .collect();
    assert_eq!(sections, vec![1, 2]);
}
