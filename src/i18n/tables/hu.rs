// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hungarian.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "A current() függvény nem megengedett az illesztési mintában!"),
    (ER_CURRENT_TAKES_NO_ARGS, "A current() függvény nem fogad el argumentumokat!"),
    (ER_DOCUMENT_REPLACED, "A document() függvény megvalósítását lecserélte az org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "A kontextusnak nincs tulajdonos dokumentuma!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "A local-name() függvénynek túl sok argumentuma van."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "A namespace-uri() függvénynek túl sok argumentuma van."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "A normalize-space() függvénynek túl sok argumentuma van."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "A number() függvénynek túl sok argumentuma van."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "A name() függvénynek túl sok argumentuma van."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "A string() függvénynek túl sok argumentuma van."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "A string-length() függvénynek túl sok argumentuma van."),
    (ER_TRANSLATE_TAKES_3_ARGS, "A translate() függvény három argumentumot vár!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Az unparsed-entity-uri függvénynek egy argumentumot kell kapnia!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "A névtér tengely még nincs megvalósítva!"),
    (ER_UNKNOWN_AXIS, "ismeretlen tengely: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "ismeretlen illesztési művelet!"),
    (ER_INCORRECT_ARG_LENGTH, "A processing-instruction() csomópontteszt argumentumának hossza helytelen!"),
    (ER_CANT_CONVERT_TO_NUMBER, "A(z) {0} nem alakítható számmá"),
    (ER_CANT_CONVERT_TO_NODELIST, "A(z) {0} nem alakítható NodeList-té!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "A(z) {0} nem alakítható NodeSetDTM-mé!"),
    (ER_CANT_CONVERT_TO_TYPE, "A(z) {0} nem alakítható type#{1} típussá"),
    (ER_EXPECTED_MATCH_PATTERN, "Illesztési minta kellene a getMatchScore-ban!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Nem lehet lekérni a(z) {0} nevű változót"),
    (ER_UNKNOWN_OPCODE, "HIBA! Ismeretlen műveleti kód: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "További nem megengedett tokenek: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Rosszul idézett literál... dupla idézőjel kellene!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Rosszul idézett literál... szimpla idézőjel kellene!"),
    (ER_EMPTY_EXPRESSION, "Üres kifejezés!"),
    (ER_EXPECTED_BUT_FOUND, "{0} kellene, de ez található: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "A programozói állítás hibás! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "A boolean(...) argumentuma többé nem opcionális a 19990709 XPath vázlat szerint."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "',' található, de nincs előtte argumentum!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "',' található, de nincs utána argumentum!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "A '..[predikátum]' vagy '.[predikátum]' nem megengedett szintaxis.  Használja inkább a 'self::node()[predikátum]' formát."),
    (ER_ILLEGAL_AXIS_NAME, "nem megengedett tengelynév: {0}"),
    (ER_UNKNOWN_NODETYPE, "Ismeretlen csomóponttípus: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "A minta literált ({0}) idézőjelek közé kell tenni!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "A(z) {0} nem formázható számmá!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Nem lehet létrehozni az XML TransformerFactory Liaison-t: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Hiba! Nem található az xpath kiválasztási kifejezés (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "HIBA! Nem található ENDOP az OP_LOCATIONPATH után"),
    (ER_ERROR_OCCURED, "Hiba történt!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "A változóhoz megadott VariableReference kívül esik a kontextuson vagy nincs definíciója!  Név = {0}"),
    (ER_AXES_NOT_ALLOWED, "Csak a child:: és az attribute:: tengelyek megengedettek illesztési mintákban!  Hibás tengelyek = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "A key() argumentumainak száma helytelen."),
    (ER_COUNT_TAKES_1_ARG, "A count függvénynek egy argumentumot kell kapnia!"),
    (ER_COULDNOT_FIND_FUNCTION, "A függvény nem található: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nem támogatott kódolás: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "Probléma történt a DTM-ben a getNextSibling-ben... helyreállítási kísérlet"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Programozói hiba: az EmptyNodeList nem írható."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "A setDOMFactory nem támogatott az XPathContext-ben!"),
    (ER_PREFIX_MUST_RESOLVE, "Az előtagnak névtérre kell feloldódnia: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "A parse (InputSource source) nem támogatott az XPathContext-ben! Nem lehet megnyitni: {0}"),
    (ER_SAX_API_NOT_HANDLED, "A SAX API characters(char ch[]... függvényét nem kezeli a DTM!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "Az ignorableWhitespace(char ch[]... függvényt nem kezeli a DTM!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "A DTMLiaison nem tudja kezelni a(z) {0} típusú csomópontokat"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "A DOM2Helper nem tudja kezelni a(z) {0} típusú csomópontokat"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "DOM2Helper.parse hiba: Rendszerazonosító - {0} sor - {1}"),
    (ER_XERCES_PARSE_ERROR, "DOM2Helper.parse hiba"),
    (ER_INVALID_UTF16_SURROGATE, "Érvénytelen UTF-16 helyettesítő: {0} ?"),
    (ER_OIERROR, "IO hiba"),
    (ER_CANNOT_CREATE_URL, "Nem hozható létre URL ehhez: {0}"),
    (ER_XPATH_READOBJECT, "Az XPath.readObject-ben: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "A függvény token nem található."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Nem kezelhető XPath típus: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Ez a NodeSet nem módosítható"),
    (ER_NODESETDTM_NOT_MUTABLE, "Ez a NodeSetDTM nem módosítható"),
    (ER_VAR_NOT_RESOLVABLE, "A változó nem oldható fel: {0}"),
    (ER_NULL_ERROR_HANDLER, "Null hibakezelő"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programozói állítás: ismeretlen műveleti kód: {0}"),
    (ER_ZERO_OR_ONE, "0 vagy 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Az rtf() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Az asNodeIterator() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "A detach() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "A num() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Az xstr() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Az str() függvényt nem támogatja az XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "Az fsb() függvény nem támogatott az XStringForChars esetében"),
    (ER_COULD_NOT_FIND_VAR, "Nem található {0} nevű változó"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "Az XStringForChars nem kaphat karaktersorozatot argumentumként"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "A FastStringBuffer argumentum nem lehet null"),
    (ER_TWO_OR_THREE, "2 vagy 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "A változóhoz a kötése előtt történt hozzáférés!"),
    (ER_FSB_CANNOT_TAKE_STRING, "Az XStringForFSB nem kaphat karaktersorozatot argumentumként!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Hiba! A walker gyökerének null értékre állítása!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Ez a NodeSetDTM nem tud előző csomópontra iterálni!"),
    (ER_NODESET_CANNOT_ITERATE, "Ez a NodeSet nem tud előző csomópontra iterálni!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Ez a NodeSetDTM nem képes indexelési vagy számlálási függvényekre!"),
    (ER_NODESET_CANNOT_INDEX, "Ez a NodeSet nem képes indexelési vagy számlálási függvényekre!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "A setShouldCacheNodes nem hívható meg a nextNode hívása után!"),
    (ER_ONLY_ALLOWS, "A(z) {0} csak {1} argumentumot enged meg"),
    (ER_UNKNOWN_STEP, "Programozói állítás a getNextStepPos-ban: ismeretlen stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Relatív elhelyezkedési útvonalnak kellene következnie a '/' vagy '//' token után."),
    (ER_EXPECTED_LOC_PATH, "Elhelyezkedési útvonal kellene, de helyette az XPath kifejezés vége található."),
    (ER_EXPECTED_LOC_STEP, "Elhelyezkedési lépésnek kellene következnie a '/' vagy '//' token után."),
    (ER_EXPECTED_NODE_TEST, "NCName:* vagy QName illeszkedésű csomóponttesztnek kellene következnie."),
    (ER_EXPECTED_STEP_PATTERN, "Lépésmintának kellene következnie, de '/' található."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Relatív útvonal mintának kellene következnie."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "A(z) ''{0}'' XPath kifejezés XPathResult eredményének XPathResultType típusa {1}, ami nem alakítható logikai értékké."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "A(z) ''{0}'' XPath kifejezés XPathResult eredményének XPathResultType típusa {1}, ami nem alakítható egyetlen csomóponttá. A getSingleNodeValue metódus csak az ANY_UNORDERED_NODE_TYPE és FIRST_ORDERED_NODE_TYPE típusokra alkalmazható."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "A getSnapshotLength metódus nem hívható meg a(z) ''{0}'' XPath kifejezés XPathResult eredményén, mert annak XPathResultType típusa {1}. Ez a metódus csak az UNORDERED_NODE_SNAPSHOT_TYPE és ORDERED_NODE_SNAPSHOT_TYPE típusokra alkalmazható."),
    (ER_NON_ITERATOR_TYPE, "Az iterateNext metódus nem hívható meg a(z) ''{0}'' XPath kifejezés XPathResult eredményén, mert annak XPathResultType típusa {1}. Ez a metódus csak az UNORDERED_NODE_ITERATOR_TYPE és ORDERED_NODE_ITERATOR_TYPE típusokra alkalmazható."),
    (ER_DOC_MUTATED, "A dokumentum megváltozott az eredmény visszaadása óta. Az iterátor érvénytelen."),
    (ER_INVALID_XPATH_TYPE, "Érvénytelen XPath típus argumentum: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Üres XPath eredményobjektum"),
    (ER_INCOMPATIBLE_TYPES, "A(z) ''{0}'' XPath kifejezés XPathResult eredményének XPathResultType típusa {1}, ami nem kényszeríthető a megadott {2} XPathResultType típusra."),
    (ER_NULL_RESOLVER, "Az előtag nem oldható fel null előtagfeloldóval."),
    (ER_CANT_CONVERT_TO_STRING, "A(z) ''{0}'' XPath kifejezés XPathResult eredményének XPathResultType típusa {1}, ami nem alakítható karaktersorozattá."),
    (ER_NON_SNAPSHOT_TYPE, "A snapshotItem metódus nem hívható meg a(z) ''{0}'' XPath kifejezés XPathResult eredményén, mert annak XPathResultType típusa {1}. Ez a metódus csak az UNORDERED_NODE_SNAPSHOT_TYPE és ORDERED_NODE_SNAPSHOT_TYPE típusokra alkalmazható."),
    (ER_WRONG_DOCUMENT, "A kontextus csomópont nem ahhoz a dokumentumhoz tartozik, amely ehhez az XPathEvaluator-hoz van kötve."),
    (ER_WRONG_NODETYPE, "A kontextus csomópont típusa nem támogatott."),
    (ER_XPATH_ERROR, "Ismeretlen hiba az XPath-ban."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "A(z) ''{0}'' XPath kifejezés XPathResult eredményének XPathResultType típusa {1}, ami nem alakítható számmá"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "A(z) ''{0}'' kiterjesztési függvény nem hívható meg, ha az XMLConstants.FEATURE_SECURE_PROCESSING szolgáltatás értéke true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "A resolveVariable null értéket ad vissza a(z) {0} változóra"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nem támogatott visszatérési típus: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "A forrás és/vagy visszatérési típus nem lehet null"),
    (ER_ARG_CANNOT_BE_NULL, "A(z) {0} argumentum nem lehet null"),
    (ER_OBJECT_MODEL_NULL, "A(z) {0}#isObjectModelSupported( String objectModel ) nem hívható meg objectModel == null értékkel"),
    (ER_OBJECT_MODEL_EMPTY, "A(z) {0}#isObjectModelSupported( String objectModel ) nem hívható meg objectModel == \"\" értékkel"),
    (ER_FEATURE_NAME_NULL, "Kísérlet null nevű szolgáltatás beállítására: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Kísérlet a(z) \"{0}\" ismeretlen szolgáltatás beállítására:{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Kísérlet null nevű szolgáltatás lekérésére: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Kísérlet a(z) \"{0}\" ismeretlen szolgáltatás lekérésére:{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Kísérlet null XPathFunctionResolver beállítására:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Kísérlet null XPathVariableResolver beállítására:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "A format-number függvényben lévő területi beállítás nevét még nem kezeli a rendszer!"),
    (WG_PROPERTY_NOT_SUPPORTED, "Nem támogatott XSL tulajdonság: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Jelenleg semmi sem történik a(z) {0} névtérrel a(z) {1} tulajdonságban"),
    (WG_SECURITY_EXCEPTION, "SecurityException az XSL rendszertulajdonság elérésekor: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Régi szintaxis: a quo(...) többé nincs definiálva az XPath-ban."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "Az XPath-nak származtatott objektum kell a nodeTest megvalósításához!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "A függvény token nem található."),
    (WG_COULDNOT_FIND_FUNCTION, "A függvény nem található: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Nem hozható létre URL ebből: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "A -E opció nem támogatott a DTM elemzőnél"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "A változóhoz megadott VariableReference kívül esik a kontextuson vagy nincs definíciója!  Név = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nem támogatott kódolás: {0}"),
    // UI strings
    (UI_LANGUAGE, "hu"),
    (HELP_LANGUAGE, "hu"),
    (LANGUAGE, "hu"),
    (BAD_CODE, "A createMessage paramétere kívül esik a határokon"),
    (FORMAT_FAILED, "Kivétel történt a messageFormat hívása során"),
    (VERSION, ">>>>>>> Xalan verzió "),
    (VERSION2, "<<<<<<<"),
    (YES, "igen"),
    (LINE, "Sor #"),
    (COLUMN, "Oszlop #"),
    (XSLDONE, "XSLProcessor: kész"),
    (XPATH_OPTION, "xpath opciók: "),
    (OPTION_IN, "   [-in bemenetiXMLURL]"),
    (OPTION_SELECT, "   [-select xpath kifejezés]"),
    (OPTION_MATCH, "   [-match illesztési minta (illesztési diagnosztikához)]"),
    (OPTION_ANY_EXPR, "Vagy csak egy xpath kifejezés diagnosztikai kiírást végez"),
    (NO_PARSER_MSG1, "Az XSL feldolgozás nem sikerült."),
    (NO_PARSER_MSG2, "** Az elemző nem található **"),
    (NO_PARSER_MSG3, "Ellenőrizze az osztályútvonalat."),
    (NO_PARSER_MSG4, "Ha nincs meg az IBM Java XML elemzője, letöltheti innen:"),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Hiba: "),
    (WARNING_HEADER, "Figyelmeztetés: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "MINTA "),
];
