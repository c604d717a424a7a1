//! Ukrainian locale: ЙЦУКЕН keyboard with Ukrainian letters and record tables.

use super::RegionalTables;

pub(crate) const KEYBOARD_ROWS: &[&str] = &[
    "1234567890-",
    "йцукенгшщзхї",
    "фівапролджє",
    "ячсмитьбю.",
];

pub(crate) const ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Surnames in -енко, -ук and -ник do not inflect by gender.
const SURNAMES: &[&str] = &[
    "Шевченко",
    "Коваленко",
    "Бондаренко",
    "Ткаченко",
    "Кравченко",
    "Олійник",
    "Шевчук",
    "Поліщук",
    "Бойко",
    "Мельник",
    "Ковальчук",
    "Савченко",
    "Руденко",
    "Мороз",
    "Лисенко",
    "Марченко",
];

pub(crate) const TABLES: RegionalTables = RegionalTables {
    male_surnames: SURNAMES,
    female_surnames: SURNAMES,
    male_first_names: &[
        "Олександр",
        "Андрій",
        "Дмитро",
        "Сергій",
        "Тарас",
        "Богдан",
        "Максим",
        "Іван",
        "Володимир",
        "Юрій",
        "Остап",
        "Назар",
        "Василь",
        "Микола",
        "Петро",
        "Ярослав",
    ],
    female_first_names: &[
        "Олена", "Наталія", "Оксана", "Тетяна", "Ірина", "Юлія", "Марія", "Софія", "Анна",
        "Катерина", "Галина", "Леся", "Христина", "Дарина", "Вікторія", "Соломія",
    ],
    male_patronymics: &[
        "Олександрович",
        "Андрійович",
        "Дмитрович",
        "Сергійович",
        "Тарасович",
        "Богданович",
        "Іванович",
        "Володимирович",
        "Юрійович",
        "Васильович",
        "Миколайович",
        "Петрович",
    ],
    female_patronymics: &[
        "Олександрівна",
        "Андріївна",
        "Дмитрівна",
        "Сергіївна",
        "Тарасівна",
        "Богданівна",
        "Іванівна",
        "Володимирівна",
        "Юріївна",
        "Василівна",
        "Миколаївна",
        "Петрівна",
    ],
    cities: &[
        "Київ",
        "Харків",
        "Одеса",
        "Дніпро",
        "Львів",
        "Запоріжжя",
        "Вінниця",
        "Полтава",
        "Чернігів",
        "Черкаси",
        "Житомир",
        "Суми",
        "Рівне",
        "Івано-Франківськ",
    ],
    streets: &[
        "Хрещатик",
        "Шевченка",
        "Франка",
        "Лесі Українки",
        "Грушевського",
        "Соборна",
        "Незалежності",
        "Садова",
        "Центральна",
        "Миру",
        "Зелена",
        "Київська",
        "Шкільна",
        "Набережна",
    ],
    city_prefix: "м.",
    street_prefix: "вул.",
    house_prefix: "буд.",
    flat_prefix: "кв.",
    postcode_mask: "#####",
    phone_mask: "+380 (##) ###-##-##",
};
