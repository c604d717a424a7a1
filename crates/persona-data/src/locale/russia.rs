//! Russian locale: ЙЦУКЕН keyboard and record tables.

use super::RegionalTables;

pub(crate) const KEYBOARD_ROWS: &[&str] = &[
    "1234567890-",
    "йцукенгшщзхъ",
    "фывапролджэ",
    "ячсмитьбю.",
];

pub(crate) const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

pub(crate) const TABLES: RegionalTables = RegionalTables {
    male_surnames: &[
        "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
        "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семёнов", "Егоров",
    ],
    female_surnames: &[
        "Иванова",
        "Смирнова",
        "Кузнецова",
        "Попова",
        "Васильева",
        "Петрова",
        "Соколова",
        "Михайлова",
        "Новикова",
        "Фёдорова",
        "Морозова",
        "Волкова",
        "Алексеева",
        "Лебедева",
        "Семёнова",
        "Егорова",
    ],
    male_first_names: &[
        "Александр",
        "Дмитрий",
        "Максим",
        "Сергей",
        "Андрей",
        "Алексей",
        "Артём",
        "Илья",
        "Кирилл",
        "Михаил",
        "Никита",
        "Матвей",
        "Роман",
        "Егор",
        "Иван",
        "Владимир",
    ],
    female_first_names: &[
        "Анастасия",
        "Мария",
        "Анна",
        "Виктория",
        "Екатерина",
        "Наталья",
        "Марина",
        "Полина",
        "Дарья",
        "Алиса",
        "Елена",
        "Ольга",
        "Татьяна",
        "Ксения",
        "Светлана",
        "Юлия",
    ],
    male_patronymics: &[
        "Александрович",
        "Дмитриевич",
        "Сергеевич",
        "Андреевич",
        "Алексеевич",
        "Михайлович",
        "Иванович",
        "Владимирович",
        "Николаевич",
        "Петрович",
        "Юрьевич",
        "Викторович",
    ],
    female_patronymics: &[
        "Александровна",
        "Дмитриевна",
        "Сергеевна",
        "Андреевна",
        "Алексеевна",
        "Михайловна",
        "Ивановна",
        "Владимировна",
        "Николаевна",
        "Петровна",
        "Юрьевна",
        "Викторовна",
    ],
    cities: &[
        "Москва",
        "Санкт-Петербург",
        "Новосибирск",
        "Екатеринбург",
        "Казань",
        "Нижний Новгород",
        "Челябинск",
        "Самара",
        "Омск",
        "Ростов-на-Дону",
        "Уфа",
        "Красноярск",
        "Воронеж",
        "Пермь",
    ],
    streets: &[
        "Ленина",
        "Пушкина",
        "Гагарина",
        "Советская",
        "Мира",
        "Садовая",
        "Лесная",
        "Школьная",
        "Молодёжная",
        "Центральная",
        "Набережная",
        "Октябрьская",
        "Заречная",
        "Новая",
    ],
    city_prefix: "г.",
    street_prefix: "ул.",
    house_prefix: "д.",
    flat_prefix: "кв.",
    postcode_mask: "######",
    phone_mask: "+7 (9##) ###-##-##",
};
