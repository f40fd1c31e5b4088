//! End-to-end product registration flows through `RegistrationSession`.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use rust_decimal::Decimal;
use seller_console::form::ItemChange;
use seller_console::options::{
    StaleReason, generate_combinations, validate_combinations_against_groups,
    validate_option_groups,
};
use seller_console::{
    AppError, ErrorCode, FormError, FormField, FormStore, OptionError, ProductForm,
    RegistrationSession, StaticConfirm,
};
use shared::models::{
    CombinationChange, OptionGroup, OptionItem, ProductNotice, VariantCombination,
};

fn group(name: &str, items: &[(&str, Option<i64>)]) -> OptionGroup {
    OptionGroup::new(
        name,
        items
            .iter()
            .map(|(item, price)| OptionItem::new(*item, price.map(Decimal::from)))
            .collect(),
    )
}

fn names(rows: &[VariantCombination]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.combination.clone()).collect()
}

fn notice() -> ProductNotice {
    ProductNotice {
        origin: "대한민국".into(),
        material: "린넨 100%".into(),
        color: "아이보리, 블랙".into(),
        size: "M, L".into(),
        manufacturer: "오늘의공방".into(),
        washing_method: "손세탁".into(),
        manufacture_date: "2026-09".into(),
        as_info: "02-000-0000".into(),
        quality_assurance: "관련 법 및 소비자분쟁해결기준에 따름".into(),
    }
}

fn session_with(groups: Vec<OptionGroup>, confirm: StaticConfirm) -> RegistrationSession {
    let form = ProductForm {
        name: "린넨 셔츠".into(),
        category_id: Some(3),
        regular_price: 39000,
        description: "<p>여름용 린넨 셔츠</p>".into(),
        product_notice: notice(),
        option_groups: groups,
        ..Default::default()
    };
    RegistrationSession::new(FormStore::new(form), Arc::new(confirm))
}

#[test]
fn cartesian_completeness() {
    let groups = vec![
        group("색상", &[("아이보리", None), ("블랙", None)]),
        group("사이즈", &[("S", None), ("M", None), ("L", None)]),
        group("소재", &[("린넨", None), ("코튼", None)]),
    ];
    let rows = generate_combinations(&validate_option_groups(&groups).unwrap());
    assert_eq!(rows.len(), 2 * 3 * 2);

    let distinct: HashSet<Vec<String>> = names(&rows).into_iter().collect();
    assert_eq!(distinct.len(), rows.len());
    for row in &rows {
        assert_eq!(row.combination.len(), 3);
        assert!(["아이보리", "블랙"].contains(&row.combination[0].as_str()));
        assert!(["S", "M", "L"].contains(&row.combination[1].as_str()));
        assert!(["린넨", "코튼"].contains(&row.combination[2].as_str()));
    }
}

#[test]
fn last_group_varies_fastest() {
    let groups = vec![
        group("A", &[("A1", None), ("A2", None)]),
        group("B", &[("B1", None), ("B2", None)]),
    ];
    let rows = generate_combinations(&validate_option_groups(&groups).unwrap());
    assert_eq!(
        names(&rows),
        vec![
            vec!["A1", "B1"],
            vec!["A1", "B2"],
            vec!["A2", "B1"],
            vec!["A2", "B2"],
        ]
    );
}

#[test]
fn first_row_is_the_only_representative() {
    let session = session_with(
        vec![
            group("색상", &[("아이보리", None), ("블랙", None)]),
            group("사이즈", &[("M", None), ("L", None)]),
        ],
        StaticConfirm::accept(),
    );
    session.move_to_combinations().unwrap();

    let rows = session.store().snapshot().option_combinations;
    let representatives: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_representative)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(representatives, vec![0]);

    // the selector moves the flag, never duplicates it
    let last = rows[3].id.clone();
    session.set_representative(&last).unwrap();
    let rows = session.store().snapshot().option_combinations;
    assert_eq!(rows.iter().filter(|r| r.is_representative).count(), 1);
    assert!(rows[3].is_representative);
}

#[test]
fn prices_are_summed_with_missing_as_zero() {
    let groups = vec![
        group("색상", &[("레드", Some(100)), ("블루", None)]),
        group("사이즈", &[("XL", Some(50))]),
    ];
    let rows = generate_combinations(&validate_option_groups(&groups).unwrap());
    assert_eq!(rows[0].price, Decimal::from(150));
    assert_eq!(rows[1].price, Decimal::from(50));
}

#[test]
fn missing_group_name_short_circuits() {
    // the duplicate items would fail too, but the name check comes first
    let groups = vec![group("", &[("Red", None), ("Red", None)])];
    assert_eq!(
        validate_option_groups(&groups),
        Err(OptionError::MissingGroupName { index: 1 })
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let groups = vec![
        group("Color", &[("Red", None)]),
        group("Color", &[("Blue", None)]),
    ];
    assert_eq!(
        validate_option_groups(&groups),
        Err(OptionError::DuplicateGroupName {
            name: "Color".into()
        })
    );

    let groups = vec![group("Color", &[("Red", None), ("Red", None)])];
    assert_eq!(
        validate_option_groups(&groups),
        Err(OptionError::DuplicateItemName {
            group: "Color".into(),
            item: "Red".into()
        })
    );
}

#[test]
fn stale_combinations_are_detected() {
    let generated_for = vec![group("사이즈", &[("S", None), ("M", None), ("L", None)])];
    let rows = generate_combinations(&validate_option_groups(&generated_for).unwrap());

    let current = vec![group("사이즈", &[("S", None), ("M", None)])];
    assert_eq!(
        validate_combinations_against_groups(&rows, &current),
        Err(OptionError::CombinationsStale(StaleReason::CountMismatch {
            expected: 2,
            actual: 3
        }))
    );
}

#[test]
fn no_filled_groups_accepts_any_combinations() {
    let blank = vec![OptionGroup::empty()];
    assert_eq!(validate_combinations_against_groups(&[], &blank), Ok(()));
    assert_eq!(validate_combinations_against_groups(&[], &[]), Ok(()));

    let rows = generate_combinations(
        &validate_option_groups(&[group("사이즈", &[("S", None)])]).unwrap(),
    );
    assert_eq!(validate_combinations_against_groups(&rows, &blank), Ok(()));
}

#[test]
fn renamed_item_requires_regeneration() {
    let session = session_with(
        vec![group("사이즈", &[("S", None), ("M", None)])],
        StaticConfirm::accept(),
    );
    session.move_to_combinations().unwrap();

    let (group_id, item_id) = session
        .store()
        .read(|f| (f.option_groups[0].id.clone(), f.option_groups[0].items[1].id.clone()));
    session
        .update_option_item(&group_id, &item_id, ItemChange::Name("XL".into()))
        .unwrap();

    let err: AppError = session.submit().unwrap_err().into();
    assert_eq!(err.code, ErrorCode::CombinationsStale);
    assert_eq!(
        err.message,
        "옵션 설정이 변경되었습니다. '옵션 목록으로 이동' 버튼을 눌러 옵션 목록을 다시 생성해 주세요."
    );

    session.move_to_combinations().unwrap();
    let request = session.submit().unwrap();
    assert_eq!(request.variants[1].option_names, vec!["XL"]);
}

#[test]
fn group_renamed_into_collision_blocks_submit() {
    let session = session_with(
        vec![group("Color", &[("Red", None)]), group("Size", &[("S", None)])],
        StaticConfirm::accept(),
    );
    session.move_to_combinations().unwrap();

    let size_id = session.store().read(|f| f.option_groups[1].id.clone());
    session.rename_option_group(&size_id, "Color").unwrap();
    let err = session.submit().unwrap_err();
    assert_eq!(
        err,
        FormError::Option(OptionError::DuplicateGroupName {
            name: "Color".into()
        })
    );
    let err: AppError = err.into();
    assert_eq!(err.code, ErrorCode::OptionGroupNameDuplicate);
}

#[test]
fn item_renamed_into_collision_blocks_submit() {
    let session = session_with(
        vec![group("Size", &[("S", None), ("M", None)])],
        StaticConfirm::accept(),
    );
    session.move_to_combinations().unwrap();

    let (group_id, item_id) = session
        .store()
        .read(|f| (f.option_groups[0].id.clone(), f.option_groups[0].items[1].id.clone()));
    session
        .update_option_item(&group_id, &item_id, ItemChange::Name("S".into()))
        .unwrap();
    assert_eq!(
        session.submit(),
        Err(FormError::Option(OptionError::DuplicateItemName {
            group: "Size".into(),
            item: "S".into()
        }))
    );
}

#[test]
fn duplicated_draft_rows_block_submit() {
    let session = session_with(
        vec![group("Size", &[("S", None), ("M", None)])],
        StaticConfirm::accept(),
    );
    session.move_to_combinations().unwrap();
    session.update_product(|form| form.option_combinations[1].combination = vec!["S".into()]);

    assert_eq!(
        session.submit(),
        Err(FormError::Option(OptionError::CombinationsStale(
            StaleReason::DuplicateRow { row: 1, first: 0 }
        )))
    );
}

#[test]
fn sale_price_follows_discount_flag() {
    let session = session_with(vec![OptionGroup::empty()], StaticConfirm::accept());
    session.update_product(|form| {
        form.regular_price = 10000;
        form.discount_amount = 2000;
    });
    assert_eq!(session.submit().unwrap().sale_price, 10000);

    session.update_product(|form| form.is_discount = true);
    let request = session.submit().unwrap();
    assert_eq!(request.regular_price, 10000);
    assert_eq!(request.sale_price, 8000);
}

#[test]
fn missing_product_notice_blocks_submit() {
    let session = session_with(vec![OptionGroup::empty()], StaticConfirm::accept());
    session.update_product(|form| form.product_notice.washing_method.clear());
    let err: AppError = session.submit().unwrap_err().into();
    assert_eq!(err.code, ErrorCode::RequiredField);
    assert_eq!(err.message, "세탁 방법을 입력해 주세요.");
}

#[test]
fn submit_without_generating_asks_to_move() {
    let session = session_with(
        vec![group("사이즈", &[("S", None)])],
        StaticConfirm::accept(),
    );
    assert_eq!(
        session.submit(),
        Err(FormError::Option(OptionError::CombinationsNotGenerated))
    );
}

#[test]
fn editor_keeps_at_least_one_group_and_item() {
    let session = session_with(vec![OptionGroup::empty()], StaticConfirm::accept());
    let (group_id, item_id) = session
        .store()
        .read(|f| (f.option_groups[0].id.clone(), f.option_groups[0].items[0].id.clone()));

    assert_eq!(session.remove_option_group(&group_id), Err(FormError::LastGroup));
    assert_eq!(
        session.remove_option_item(&group_id, &item_id),
        Err(FormError::LastItem)
    );

    let second = session.add_option_group();
    session.remove_option_group(&second).unwrap();
    assert_eq!(session.store().read(|f| f.option_groups.len()), 1);
}

#[tokio::test]
async fn full_registration_flow() {
    let session = session_with(
        vec![
            group("색상", &[("아이보리", None), ("블랙", Some(1000))]),
            group("사이즈", &[("M", None), ("L", Some(2000))]),
        ],
        StaticConfirm::accept(),
    );
    let mut changes = session.store().subscribe();

    assert_eq!(session.move_to_combinations().unwrap(), 4);
    let change = changes.recv().await.unwrap();
    assert_eq!(change.field, FormField::OptionCombinations);

    let rows = session.store().snapshot().option_combinations;
    session
        .update_combination(&rows[1].id, CombinationChange::Stock(12))
        .unwrap();
    session
        .update_combination(&rows[2].id, CombinationChange::Displayed(false))
        .unwrap();
    session.set_representative(&rows[3].id).unwrap();
    assert!(session.remove_combination(&rows[0].id).await.unwrap());

    // three rows left for four expected combinations
    assert!(matches!(
        session.submit(),
        Err(FormError::Option(OptionError::CombinationsStale(_)))
    ));

    // drop 아이보리 entirely: its remaining row and its option item
    assert!(session.remove_combination(&rows[1].id).await.unwrap());
    let (group_id, item_id) = session
        .store()
        .read(|f| (f.option_groups[0].id.clone(), f.option_groups[0].items[0].id.clone()));
    session.remove_option_item(&group_id, &item_id).unwrap();
    let request = session.submit().unwrap();

    assert_eq!(request.option_groups.len(), 2);
    assert_eq!(request.option_groups[0].options.len(), 1);
    assert_eq!(request.variants.len(), 2);
    let representative = request.representative().unwrap();
    assert_eq!(representative.option_names, vec!["블랙", "L"]);
    assert_eq!(representative.sale_price, Decimal::from(3000));
    assert!(!request.variants[0].is_display);
}

#[test]
fn draft_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "머그컵",
            "categoryId": 7,
            "regularPrice": 9000,
            "purchasePrice": 4000,
            "description": "<p>도자기 머그</p>",
            "productNotice": {{
                "origin": "대한민국", "material": "도자기", "color": "화이트, 네이비",
                "size": "350ml", "manufacturer": "오늘의공방", "washingMethod": "식기세척기 가능",
                "manufactureDate": "2026-08", "asInfo": "02-000-0000", "qualityAssurance": "1년"
            }},
            "optionGroups": [
                {{ "name": "색상", "items": [{{ "name": "화이트" }}, {{ "name": "네이비", "price": 500 }}] }}
            ]
        }}"#
    )
    .unwrap();

    let form = ProductForm::from_json_file(file.path()).unwrap();
    let session = RegistrationSession::new(FormStore::new(form), Arc::new(StaticConfirm::decline()));
    session.move_to_combinations().unwrap();
    let request = session.submit().unwrap();

    assert_eq!(request.sale_price, 9000);
    assert_eq!(request.purchase_price, 4000);
    assert_eq!(request.product_notice.washing_method, "식기세척기 가능");
    assert_eq!(request.variants[1].sale_price, Decimal::from(500));
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["variants"][1]["optionNames"][0], "네이비");
    assert_eq!(json["variants"][0]["isRepresentative"], true);
}
