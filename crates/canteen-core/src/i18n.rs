//! Locales and the message catalog.
//!
//! Lookup is by string key so screens can name messages the same way in
//! every locale. An unknown key is returned unchanged.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

impl Locale {
    /// All locales, in menu order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ar];

    /// Lenient parse: unknown codes map to English.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Next locale in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        // Accept POSIX-style values such as "fr_FR.UTF-8".
        let prefix = lower.split(['_', '-', '.']).next().unwrap_or_default();
        match prefix {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" | "francais" | "français" => Ok(Self::Fr),
            "ar" | "arabic" => Ok(Self::Ar),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Detect the locale from environment settings, defaulting to English.
pub fn detect_locale() -> Locale {
    for var in &["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Ok(locale) = value.parse() {
                return locale;
            }
        }
    }
    Locale::En
}

macro_rules! catalog {
    ($( $key:literal => [$en:literal, $fr:literal, $ar:literal $(,)?] ),* $(,)?) => {
        /// Every key defined in the catalog.
        pub const MESSAGE_KEYS: &[&str] = &[$($key),*];

        fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
            match key {
                $( $key => Some(match locale {
                    Locale::En => $en,
                    Locale::Fr => $fr,
                    Locale::Ar => $ar,
                }), )*
                _ => None,
            }
        }
    };
}

catalog! {
    // Common
    "search" => ["Search...", "Rechercher...", "بحث..."],
    "cancel" => ["Cancel", "Annuler", "إلغاء"],
    "confirm" => ["Confirm", "Confirmer", "تأكيد"],
    "edit" => ["Edit", "Modifier", "تعديل"],
    "delete" => ["Delete", "Supprimer", "حذف"],
    "save" => ["Save", "Enregistrer", "حفظ"],
    "all" => ["All", "Tout", "الكل"],
    "total" => ["Total", "Total", "المجموع"],
    "items" => ["items", "articles", "عناصر"],
    "minutes" => ["min", "min", "دقيقة"],
    "notFound" => ["Not found", "Introuvable", "غير موجود"],
    "appTitle" => ["Restaurant App", "Application Restaurant", "تطبيق المطعم"],
    "language" => ["Language", "Langue", "اللغة"],
    "theme" => ["Theme", "Thème", "المظهر"],
    "light" => ["Light", "Clair", "فاتح"],
    "dark" => ["Dark", "Sombre", "داكن"],
    "noOrders" => ["No orders", "Aucune commande", "لا توجد طلبات"],
    "noProducts" => ["No products found", "Aucun produit trouvé", "لم يتم العثور على منتجات"],
    "studentRole" => ["Student", "Étudiant", "طالب"],
    "staffRole" => ["Staff", "Personnel", "الموظفون"],
    "keyboardShortcuts" => ["Keyboard shortcuts", "Raccourcis clavier", "اختصارات لوحة المفاتيح"],
    "commands" => ["Commands", "Commandes", "الأوامر"],
    "navigate" => ["Navigate", "Naviguer", "تنقل"],
    "filter" => ["Filter", "Filtrer", "تصفية"],
    "quit" => ["Quit", "Quitter", "خروج"],

    // Login
    "universityRestaurant" => ["University Restaurant", "Restaurant Universitaire", "مطعم الجامعة"],
    "signInToContinue" => ["Sign in to continue", "Connectez-vous pour continuer", "تسجيل الدخول للمتابعة"],
    "username" => ["Username", "Nom d'utilisateur", "اسم المستخدم"],
    "password" => ["Password", "Mot de passe", "كلمة المرور"],
    "enterUsername" => ["Enter username", "Entrez votre nom", "أدخل اسم المستخدم"],
    "enterPassword" => ["Enter password", "Entrez le mot de passe", "أدخل كلمة المرور"],
    "signIn" => ["Sign In", "Se connecter", "تسجيل الدخول"],
    "signOut" => ["Sign Out", "Se déconnecter", "تسجيل الخروج"],
    "demoInfo" => ["Demo Info:", "Infos de démo:", "معلومات تجريبية:"],
    "demoAdmin" => ["Admin: admin", "Admin: admin", "مدير: admin"],
    "demoStudent" => ["Student: any other name", "Étudiant: tout autre nom", "طالب: أي اسم آخر"],

    // Validation
    "fillAllFields" => ["Please fill in all fields", "Veuillez remplir tous les champs", "يرجى ملء جميع الحقول"],
    "fillRequiredFields" => ["Please fill in required fields", "Veuillez remplir les champs obligatoires", "يرجى ملء الحقول المطلوبة"],
    "selectTimeSlot" => ["Please select a time slot", "Veuillez choisir un horaire", "يرجى اختيار وقت"],

    // User App
    "home" => ["Home", "Accueil", "الرئيسية"],
    "history" => ["History", "Historique", "السجل"],
    "upcoming" => ["Upcoming", "À venir", "القادم"],
    "creditBalance" => ["Credit Balance", "Solde de crédit", "رصيد الحساب"],
    "categories" => ["Categories", "Catégories", "الفئات"],
    "suggestions" => ["Suggestions for you", "Suggestions pour vous", "اقتراحات لك"],
    "order" => ["Order", "Commander", "اطلب"],
    "quantity" => ["Quantity", "Quantité", "الكمية"],
    "pickupTime" => ["Pickup Time", "Heure de retrait", "وقت الاستلام"],
    "takeAway" => ["Take Away", "À emporter", "للخارج"],
    "eatIn" => ["Eat In", "Sur place", "تناول هنا"],
    "pending" => ["Pending", "En attente", "قيد الانتظار"],
    "confirmed" => ["Confirmed", "Confirmé", "مؤكد"],
    "paid" => ["Paid", "Payé", "مدفوع"],
    "cancelled" => ["Cancelled", "Annulé", "ملغى"],
    "tomorrowMenu" => ["Tomorrow's Menu Suggestions", "Menu de demain", "قائمة الغد"],
    "preSelect" => ["Pre-select", "Pré-sélectionner", "اختيار مسبق"],
    "changeUntilMidnight" => ["You can change your choice until midnight", "Vous pouvez changer votre choix jusqu'à minuit", "يمكنك تغيير اختيارك حتى منتصف الليل"],
    "breakfastPeriod" => ["Breakfast", "Petit déjeuner", "فطور"],
    "lunch" => ["Lunch", "Déjeuner", "غداء"],
    "dinner" => ["Dinner", "Dîner", "عشاء"],
    "allMeals" => ["All Meals", "Tous les repas", "كل الوجبات"],

    // Admin App
    "ordersOfTheDay" => ["Orders of the Day", "Commandes du jour", "طلبات اليوم"],
    "products" => ["Products", "Produits", "المنتجات"],
    "allOrders" => ["All Orders", "Toutes les commandes", "كل الطلبات"],
    "stats" => ["Statistics", "Statistiques", "الإحصائيات"],
    "accept" => ["Accept", "Accepter", "قبول"],
    "refuse" => ["Refuse", "Refuser", "رفض"],
    "suggestTime" => ["Suggest Time", "Proposer un horaire", "اقتراح وقت"],
    "addNew" => ["Add New", "Ajouter", "إضافة جديد"],
    "tomorrowPlanned" => ["Tomorrow's Planned Meals", "Repas prévus pour demain", "الوجبات المخططة لغد"],
    "totalOrders" => ["Total Orders Today", "Commandes totales aujourd'hui", "إجمالي الطلبات اليوم"],
    "totalRevenue" => ["Revenue Today", "Recette du jour", "إيرادات اليوم"],
    "totalMeals" => ["Total Meals", "Total des repas", "إجمالي الوجبات"],
    "mostOrdered" => ["Most Ordered Items", "Articles les plus commandés", "الأكثر طلباً"],
    "avgWaitTime" => ["Average Waiting Time", "Temps d'attente moyen", "متوسط وقت الانتظار"],
    "ordersByHour" => ["Orders by Hour", "Commandes par heure", "الطلبات حسب الساعة"],
    "orderStatus" => ["Order Status", "Statut des commandes", "حالة الطلبات"],
    "revenue" => ["Revenue", "Recette", "الإيرادات"],
    "customers" => ["Customers", "Clients", "الزبائن"],
    "month" => ["Month", "Mois", "شهر"],
    "year" => ["Year", "Année", "سنة"],
    "accepted" => ["Accepted", "Accepté", "مقبول"],
    "refused" => ["Refused", "Refusé", "مرفوض"],
    "productName" => ["Name", "Nom", "الاسم"],
    "price" => ["Price", "Prix", "السعر"],
    "category" => ["Category", "Catégorie", "الفئة"],
    "image" => ["Image", "Image", "صورة"],

    // Categories
    "hotDrinks" => ["Hot Drinks", "Boissons chaudes", "مشروبات ساخنة"],
    "coldDrinks" => ["Cold Drinks", "Boissons froides", "مشروبات باردة"],
    "cakesDesserts" => ["Cakes & Desserts", "Gâteaux & desserts", "كعك وحلويات"],
    "breakfast" => ["Breakfast", "Petit déjeuner", "فطور"],
    "pizzaPasta" => ["Pizza & Pasta", "Pizza & pâtes", "بيتزا ومعكرونة"],
    "dishes" => ["Main Dishes", "Plats", "أطباق رئيسية"],
    "sandwiches" => ["Sandwiches", "Sandwiches", "ساندويتشات"],
    "salads" => ["Salads", "Salades", "سلطات"],
    "dairy" => ["Dairy", "Laitage", "ألبان"],
    "snacks" => ["Snacks", "Snacks", "وجبات خفيفة"],

    // Notifications
    "orderConfirmedFor" => [
        "Order confirmed for {quantity}x {product}",
        "Commande confirmée : {quantity}x {product}",
        "تم تأكيد الطلب: {quantity}x {product}",
    ],
    "preSelectedFor" => [
        "Pre-selected {quantity}x {product} for tomorrow at {time}",
        "Pré-sélection de {quantity}x {product} pour demain à {time}",
        "تم اختيار {quantity}x {product} مسبقاً لغد على الساعة {time}",
    ],
    "orderAcceptedFor" => [
        "Order from {name} accepted for {time}",
        "Commande de {name} acceptée pour {time}",
        "تم قبول طلب {name} على الساعة {time}",
    ],
    "orderRefusedFor" => [
        "Order from {name} refused",
        "Commande de {name} refusée",
        "تم رفض طلب {name}",
    ],
    "suggestedTimeSent" => [
        "Suggested time {time} sent to student",
        "Horaire {time} proposé à l'étudiant",
        "تم إرسال الوقت المقترح {time} إلى الطالب",
    ],
    "orderCancelled" => [
        "Order #{id} cancelled",
        "Commande n°{id} annulée",
        "تم إلغاء الطلب رقم {id}",
    ],
    "productAdded" => [
        "Product \"{name}\" added successfully!",
        "Produit « {name} » ajouté avec succès !",
        "تمت إضافة المنتج \"{name}\" بنجاح!",
    ],
    "productUpdated" => [
        "Product \"{name}\" updated successfully!",
        "Produit « {name} » modifié avec succès !",
        "تم تعديل المنتج \"{name}\" بنجاح!",
    ],
    "productDeleted" => [
        "Deleted {name}",
        "{name} supprimé",
        "تم حذف {name}",
    ],
    "mealAdded" => [
        "Added {product} to {period} menu",
        "{product} ajouté au menu : {period}",
        "تمت إضافة {product} إلى قائمة {period}",
    ],
    "mealRemoved" => [
        "{product} removed from menu",
        "{product} retiré du menu",
        "تمت إزالة {product} من القائمة",
    ],
    "changesSaved" => ["Changes saved", "Modifications enregistrées", "تم حفظ التغييرات"],
    "confirmDelete" => [
        "Are you sure you want to delete {name}?",
        "Voulez-vous vraiment supprimer {name} ?",
        "هل أنت متأكد أنك تريد حذف {name}؟",
    ],
    "confirmRemoveMeal" => [
        "Remove {product} from tomorrow's menu?",
        "Retirer {product} du menu de demain ?",
        "إزالة {product} من قائمة الغد؟",
    ],
}

/// Translate a message key; an unknown key is returned as-is.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    lookup(locale, key).unwrap_or(key)
}

/// Whether the catalog defines `key`.
pub fn has_key(key: &str) -> bool {
    lookup(Locale::En, key).is_some()
}

/// Translate `key` and substitute `{name}` placeholders from `args`.
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = translate(locale, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
