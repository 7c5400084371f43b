// SPDX-License-Identifier: PMPL-1.0-or-later

//! Turkish.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "Eşleşme örüntüsünde current() işlevine izin verilmez!"),
    (ER_CURRENT_TAKES_NO_ARGS, "current() işlevi bağımsız değişken kabul etmez!"),
    (ER_DOCUMENT_REPLACED, "document() işlevi uygulamasının yerine org.apache.xalan.xslt.FuncDocument kondu!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Bağlamın iye belgesi yok!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name() işlevinde çok fazla bağımsız değişken var."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri() işlevinde çok fazla bağımsız değişken var."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space() işlevinde çok fazla bağımsız değişken var."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number() işlevinde çok fazla bağımsız değişken var."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name() işlevinde çok fazla bağımsız değişken var."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string() işlevinde çok fazla bağımsız değişken var."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length() işlevinde çok fazla bağımsız değişken var."),
    (ER_TRANSLATE_TAKES_3_ARGS, "translate() işlevi üç bağımsız değişken alır!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "unparsed-entity-uri işlevi tek bağımsız değişken almalıdır!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Ad alanı ekseni henüz gerçekleştirilmedi!"),
    (ER_UNKNOWN_AXIS, "bilinmeyen eksen: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "bilinmeyen eşleşme işlemi!"),
    (ER_INCORRECT_ARG_LENGTH, "processing-instruction() düğüm sınamasının bağımsız değişken uzunluğu yanlış!"),
    (ER_CANT_CONVERT_TO_NUMBER, "{0} bir sayıya dönüştürülemez"),
    (ER_CANT_CONVERT_TO_NODELIST, "{0} NodeList''e dönüştürülemez!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "{0} NodeSetDTM''ye dönüştürülemez!"),
    (ER_CANT_CONVERT_TO_TYPE, "{0} type#{1} tipine dönüştürülemez"),
    (ER_EXPECTED_MATCH_PATTERN, "getMatchScore içinde eşleşme örüntüsü bekleniyordu!"),
    (ER_COULDNOT_GET_VAR_NAMED, "{0} adlı değişken alınamadı"),
    (ER_UNKNOWN_OPCODE, "HATA! Bilinmeyen işlem kodu: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Fazladan geçersiz simgeler: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Hazır bilgi yanlış tırnak içine alınmış... çift tırnak bekleniyordu!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Hazır bilgi yanlış tırnak içine alınmış... tek tırnak bekleniyordu!"),
    (ER_EMPTY_EXPRESSION, "İfade boş!"),
    (ER_EXPECTED_BUT_FOUND, "{0} bekleniyordu, ancak {1} bulundu"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Programcı iddiası yanlış! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "19990709 XPath taslağında boolean(...) bağımsız değişkeni artık isteğe bağlı değil."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "',' bulundu, ancak öncesinde bağımsız değişken yok!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "',' bulundu, ancak ardından bağımsız değişken yok!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[yüklem]' ya da '.[yüklem]' geçersiz sözdizimi.  Bunun yerine 'self::node()[yüklem]' kullanın."),
    (ER_ILLEGAL_AXIS_NAME, "geçersiz eksen adı: {0}"),
    (ER_UNKNOWN_NODETYPE, "Bilinmeyen düğüm tipi: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Örüntü hazır bilgisi ({0}) tırnak içine alınmalıdır!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} bir sayı olarak biçimlendirilemedi!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "XML TransformerFactory ilişkisi yaratılamadı: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Hata! xpath seçme ifadesi (-select) bulunamadı."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "HATA! OP_LOCATIONPATH sonrasında ENDOP bulunamadı"),
    (ER_ERROR_OCCURED, "Hata oluştu!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "Bağlam dışında ya da tanımsız bir değişken için VariableReference verildi!  Ad = {0}"),
    (ER_AXES_NOT_ALLOWED, "Eşleşme örüntülerinde yalnızca child:: ve attribute:: eksenlerine izin verilir!  Hatalı eksenler = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key() işlevinde yanlış sayıda bağımsız değişken var."),
    (ER_COUNT_TAKES_1_ARG, "count işlevi tek bağımsız değişken almalıdır!"),
    (ER_COULDNOT_FIND_FUNCTION, "İşlev bulunamadı: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Desteklenmeyen kodlama: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "getNextSibling içinde DTM'de sorun oluştu... kurtarılmaya çalışılıyor"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Programcı hatası: EmptyNodeList içine yazılamaz."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "setDOMFactory XPathContext tarafından desteklenmiyor!"),
    (ER_PREFIX_MUST_RESOLVE, "Önek bir ad alanına çözülmelidir: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "parse (InputSource kaynak) XPathContext içinde desteklenmiyor! {0} açılamıyor"),
    (ER_SAX_API_NOT_HANDLED, "SAX API characters(char ch[]... DTM tarafından işlenmiyor!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]... DTM tarafından işlenmiyor!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison {0} tipindeki düğümleri işleyemez"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper {0} tipindeki düğümleri işleyemez"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "DOM2Helper.parse hatası: SystemID - {0} satır - {1}"),
    (ER_XERCES_PARSE_ERROR, "DOM2Helper.parse hatası"),
    (ER_INVALID_UTF16_SURROGATE, "Geçersiz UTF-16 yedeği saptandı: {0} ?"),
    (ER_OIERROR, "G/Ç hatası"),
    (ER_CANNOT_CREATE_URL, "{0} için URL yaratılamıyor"),
    (ER_XPATH_READOBJECT, "XPath.readObject içinde: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "İşlev simgesi bulunamadı."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "XPath tipi işlenemiyor: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Bu NodeSet değiştirilebilir değil"),
    (ER_NODESETDTM_NOT_MUTABLE, "Bu NodeSetDTM değiştirilebilir değil"),
    (ER_VAR_NOT_RESOLVABLE, "Değişken çözülemiyor: {0}"),
    (ER_NULL_ERROR_HANDLER, "Boş hata işleyici"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programcı iddiası: bilinmeyen işlem kodu: {0}"),
    (ER_ZERO_OR_ONE, "0 ya da 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "rtf() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "asNodeIterator() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "detach() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "num() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "xstr() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "str() XRTreeFragSelectWrapper tarafından desteklenmiyor"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "fsb() XStringForChars için desteklenmiyor"),
    (ER_COULD_NOT_FIND_VAR, "{0} adlı değişken bulunamadı"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars bağımsız değişken olarak dizgi alamaz"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "FastStringBuffer bağımsız değişkeni boş değerli olamaz"),
    (ER_TWO_OR_THREE, "2 ya da 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Değişkene bağlanmadan önce erişildi!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB bağımsız değişken olarak dizgi alamaz!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Hata! Walker kökü boş değere ayarlanıyor!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Bu NodeSetDTM önceki bir düğüme yineleme yapamaz!"),
    (ER_NODESET_CANNOT_ITERATE, "Bu NodeSet önceki bir düğüme yineleme yapamaz!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Bu NodeSetDTM dizinleme ya da sayma işlevlerini gerçekleştiremez!"),
    (ER_NODESET_CANNOT_INDEX, "Bu NodeSet dizinleme ya da sayma işlevlerini gerçekleştiremez!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "nextNode çağrıldıktan sonra setShouldCacheNodes çağrılamaz!"),
    (ER_ONLY_ALLOWS, "{0} yalnızca {1} bağımsız değişkene izin verir"),
    (ER_UNKNOWN_STEP, "getNextStepPos içinde programcı iddiası: bilinmeyen stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "'/' ya da '//' simgesinden sonra göreli konum yolu bekleniyordu."),
    (ER_EXPECTED_LOC_PATH, "Konum yolu bekleniyordu, ancak XPath ifadesinin sonuna ulaşıldı."),
    (ER_EXPECTED_LOC_STEP, "'/' ya da '//' simgesinden sonra konum adımı bekleniyordu."),
    (ER_EXPECTED_NODE_TEST, "NCName:* ya da QName ile eşleşen bir düğüm sınaması bekleniyordu."),
    (ER_EXPECTED_STEP_PATTERN, "Adım örüntüsü bekleniyordu, ancak '/' bulundu."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Göreli yol örüntüsü bekleniyordu."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "''{0}'' XPath ifadesinin XPathResult sonucunun XPathResultType değeri {1}; bu değer boole değerine dönüştürülemez."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "''{0}'' XPath ifadesinin XPathResult sonucunun XPathResultType değeri {1}; bu değer tek bir düğüme dönüştürülemez. getSingleNodeValue yöntemi yalnızca ANY_UNORDERED_NODE_TYPE ve FIRST_ORDERED_NODE_TYPE tipleri için geçerlidir."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "getSnapshotLength yöntemi ''{0}'' XPath ifadesinin XPathResult sonucunda çağrılamaz, çünkü XPathResultType değeri {1}. Bu yöntem yalnızca UNORDERED_NODE_SNAPSHOT_TYPE ve ORDERED_NODE_SNAPSHOT_TYPE tipleri için geçerlidir."),
    (ER_NON_ITERATOR_TYPE, "iterateNext yöntemi ''{0}'' XPath ifadesinin XPathResult sonucunda çağrılamaz, çünkü XPathResultType değeri {1}. Bu yöntem yalnızca UNORDERED_NODE_ITERATOR_TYPE ve ORDERED_NODE_ITERATOR_TYPE tipleri için geçerlidir."),
    (ER_DOC_MUTATED, "Sonuç döndürüldükten sonra belge değişti. Yineleyici geçersiz."),
    (ER_INVALID_XPATH_TYPE, "Geçersiz XPath tipi bağımsız değişkeni: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Boş XPath sonuç nesnesi"),
    (ER_INCOMPATIBLE_TYPES, "''{0}'' XPath ifadesinin XPathResult sonucunun XPathResultType değeri {1}; bu değer belirtilen {2} XPathResultType değerine zorlanamaz."),
    (ER_NULL_RESOLVER, "Boş önek çözücüyle önek çözülemez."),
    (ER_CANT_CONVERT_TO_STRING, "''{0}'' XPath ifadesinin XPathResult sonucunun XPathResultType değeri {1}; bu değer dizgiye dönüştürülemez."),
    (ER_NON_SNAPSHOT_TYPE, "snapshotItem yöntemi ''{0}'' XPath ifadesinin XPathResult sonucunda çağrılamaz, çünkü XPathResultType değeri {1}. Bu yöntem yalnızca UNORDERED_NODE_SNAPSHOT_TYPE ve ORDERED_NODE_SNAPSHOT_TYPE tipleri için geçerlidir."),
    (ER_WRONG_DOCUMENT, "Bağlam düğümü bu XPathEvaluator nesnesine bağlı belgeye ait değil."),
    (ER_WRONG_NODETYPE, "Bağlam düğümü tipi desteklenmiyor."),
    (ER_XPATH_ERROR, "XPath içinde bilinmeyen hata."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "''{0}'' XPath ifadesinin XPathResult sonucunun XPathResultType değeri {1}; bu değer bir sayıya dönüştürülemez"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "XMLConstants.FEATURE_SECURE_PROCESSING özelliği true değerine ayarlandığında ''{0}'' uzantı işlevi çağrılamaz."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "{0} değişkeni için resolveVariable boş değer döndürüyor"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Desteklenmeyen dönüş tipi: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Kaynak ve/ya da dönüş tipi boş değerli olamaz"),
    (ER_ARG_CANNOT_BE_NULL, "{0} bağımsız değişkeni boş değerli olamaz"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) objectModel == null ile çağrılamaz"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) objectModel == \"\" ile çağrılamaz"),
    (ER_FEATURE_NAME_NULL, "Boş adlı bir özellik ayarlanmaya çalışılıyor: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Bilinmeyen \"{0}\" özelliği ayarlanmaya çalışılıyor:{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Boş adlı bir özellik alınmaya çalışılıyor: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Bilinmeyen \"{0}\" özelliği alınmaya çalışılıyor:{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Boş bir XPathFunctionResolver ayarlanmaya çalışılıyor:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Boş bir XPathVariableResolver ayarlanmaya çalışılıyor:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "format-number işlevindeki yerel ayar adı henüz işlenmiyor!"),
    (WG_PROPERTY_NOT_SUPPORTED, "XSL özelliği desteklenmiyor: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "{1} özelliğindeki {0} ad alanıyla şu an hiçbir şey yapmayın"),
    (WG_SECURITY_EXCEPTION, "XSL sistem özelliğine erişilmeye çalışılırken SecurityException oluştu: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Eski sözdizimi: quo(...) artık XPath içinde tanımlı değil."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath, nodeTest işlevini gerçekleştirmek için türetilmiş bir nesneye gereksinim duyar!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "İşlev simgesi bulunamadı."),
    (WG_COULDNOT_FIND_FUNCTION, "İşlev bulunamadı: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Şundan URL oluşturulamadı: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "-E seçeneği DTM ayrıştırıcısı için desteklenmiyor"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "Bağlam dışında ya da tanımsız bir değişken için VariableReference verildi!  Ad = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Desteklenmeyen kodlama: {0}"),
    // UI strings
    (UI_LANGUAGE, "tr"),
    (HELP_LANGUAGE, "tr"),
    (LANGUAGE, "tr"),
    (BAD_CODE, "createMessage için belirtilen parametre sınırların dışında"),
    (FORMAT_FAILED, "messageFormat çağrısı sırasında kural dışı durum yayınlandı"),
    (VERSION, ">>>>>>> Xalan Sürüm "),
    (VERSION2, "<<<<<<<"),
    (YES, "evet"),
    (LINE, "Satır #"),
    (COLUMN, "Kolon #"),
    (XSLDONE, "XSLProcessor: bitti"),
    (XPATH_OPTION, "xpath seçenekleri: "),
    (OPTION_IN, "   [-in girdiXMLURL]"),
    (OPTION_SELECT, "   [-select xpath ifadesi]"),
    (OPTION_MATCH, "   [-match eşleşme örüntüsü (eşleşme tanılaması için)]"),
    (OPTION_ANY_EXPR, "Ya da yalnızca bir xpath ifadesi tanılama dökümü yapar"),
    (NO_PARSER_MSG1, "XSL işlemi başarısız oldu."),
    (NO_PARSER_MSG2, "** Ayrıştırıcı bulunamadı **"),
    (NO_PARSER_MSG3, "Lütfen sınıf yolunuzu denetleyin."),
    (NO_PARSER_MSG4, "IBM'in Java için XML ayrıştırıcısı sizde yoksa, şu adresten yükleyebilirsiniz:"),
    (NO_PARSER_MSG5, "IBM'in AlphaWorks sitesi: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Hata: "),
    (WARNING_HEADER, "Uyarı: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "ÖRÜNTÜ "),
];
