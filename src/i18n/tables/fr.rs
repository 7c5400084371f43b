// SPDX-License-Identifier: PMPL-1.0-or-later

//! French. Apostrophes are doubled only in templates that take arguments.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "current() n'est pas admis dans un motif de correspondance !"),
    (ER_CURRENT_TAKES_NO_ARGS, "current() n'accepte pas d'arguments !"),
    (ER_DOCUMENT_REPLACED, "L'implémentation de la fonction document() a été remplacée par org.apache.xalan.xslt.FuncDocument !"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "le contexte n'a pas de document propriétaire !"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name() a trop d'arguments."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri() a trop d'arguments."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space() a trop d'arguments."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number() a trop d'arguments."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name() a trop d'arguments."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string() a trop d'arguments."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length() a trop d'arguments."),
    (ER_TRANSLATE_TAKES_3_ARGS, "La fonction translate() prend trois arguments !"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "La fonction unparsed-entity-uri doit prendre un argument !"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "L'axe de l'espace de noms n'est pas encore implémenté !"),
    (ER_UNKNOWN_AXIS, "axe inconnu : {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "opération de correspondance inconnue !"),
    (ER_INCORRECT_ARG_LENGTH, "La longueur d'argument du test de noeud processing-instruction() n'est pas correcte !"),
    (ER_CANT_CONVERT_TO_NUMBER, "Impossible de convertir {0} en un nombre"),
    (ER_CANT_CONVERT_TO_NODELIST, "Impossible de convertir {0} en NodeList !"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "Impossible de convertir {0} en NodeSetDTM !"),
    (ER_CANT_CONVERT_TO_TYPE, "Impossible de convertir {0} en type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "Motif de correspondance attendu dans getMatchScore !"),
    (ER_COULDNOT_GET_VAR_NAMED, "Impossible d''obtenir la variable nommée {0}"),
    (ER_UNKNOWN_OPCODE, "ERREUR ! Code d''opération inconnu : {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Jetons incorrects supplémentaires : {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "littéral sans guillemets... guillemets doubles attendus !"),
    (ER_EXPECTED_SINGLE_QUOTE, "littéral sans guillemets... guillemet simple attendu !"),
    (ER_EMPTY_EXPRESSION, "Expression vide !"),
    (ER_EXPECTED_BUT_FOUND, "{0} attendu, mais {1} détecté"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "L''assertion du programmeur est incorrecte ! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "L'argument boolean(...) n'est plus facultatif avec le document de travail XPath 19990709."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "',' trouvé mais aucun argument ne le précède !"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "',' trouvé mais aucun argument ne le suit !"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[prédicat]' ou '.[prédicat]' n'est pas une syntaxe admise.  Utilisez plutôt 'self::node()[prédicat]'."),
    (ER_ILLEGAL_AXIS_NAME, "nom d''axe incorrect : {0}"),
    (ER_UNKNOWN_NODETYPE, "Type de noeud inconnu : {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Le littéral de motif ({0}) doit être entre guillemets !"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} ne peut pas être formaté en nombre !"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Impossible de créer la liaison XML TransformerFactory : {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Erreur ! Expression de sélection xpath (-select) introuvable."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "ERREUR ! ENDOP introuvable après OP_LOCATIONPATH"),
    (ER_ERROR_OCCURED, "Une erreur s'est produite !"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "La référence de variable indiquée est hors contexte ou sans définition !  Nom = {0}"),
    (ER_AXES_NOT_ALLOWED, "Seuls les axes child:: et attribute:: sont autorisés dans les motifs de correspondance !  Axes incriminés = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key() a un nombre d'arguments incorrect."),
    (ER_COUNT_TAKES_1_ARG, "La fonction count doit prendre un argument !"),
    (ER_COULDNOT_FIND_FUNCTION, "Fonction introuvable : {0}"),
    (ER_UNSUPPORTED_ENCODING, "Codage non pris en charge : {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "Un problème s'est produit dans DTM lors de l'appel de getNextSibling... tentative de récupération"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Erreur de programmation : Impossible d'écrire dans EmptyNodeList."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "setDOMFactory n'est pas pris en charge par XPathContext !"),
    (ER_PREFIX_MUST_RESOLVE, "Le préfixe doit se convertir en espace de noms : {0}"),
    (ER_PARSE_NOT_SUPPORTED, "parse (InputSource source) non pris en charge dans XPathContext ! Impossible d''ouvrir {0}"),
    (ER_SAX_API_NOT_HANDLED, "Fonction API SAX characters(char ch[]... non prise en charge par le DTM !"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]... non pris en charge par le DTM !"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison ne peut pas gérer les noeuds de type {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper ne peut pas gérer les noeuds de type {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Erreur DOM2Helper.parse : ID système - {0} ligne - {1}"),
    (ER_XERCES_PARSE_ERROR, "Erreur DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Substitut UTF-16 non valide détecté : {0} ?"),
    (ER_OIERROR, "Erreur d'E-S"),
    (ER_CANNOT_CREATE_URL, "Impossible de créer une URL pour : {0}"),
    (ER_XPATH_READOBJECT, "Dans XPath.readObject : {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "jeton de fonction introuvable."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Impossible de traiter le type XPath : {0}"),
    (ER_NODESET_NOT_MUTABLE, "Ce NodeSet n'est pas modifiable"),
    (ER_NODESETDTM_NOT_MUTABLE, "Ce NodeSetDTM n'est pas modifiable"),
    (ER_VAR_NOT_RESOLVABLE, "Variable impossible à résoudre : {0}"),
    (ER_NULL_ERROR_HANDLER, "Gestionnaire d'erreurs null"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Assertion du programmeur : code d''opération inconnu : {0}"),
    (ER_ZERO_OR_ONE, "0 ou 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "rtf() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "asNodeIterator() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "detach() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "num() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "xstr() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "str() n'est pas pris en charge par XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "fsb() n'est pas pris en charge pour XStringForChars"),
    (ER_COULD_NOT_FIND_VAR, "Impossible de trouver la variable nommée {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars n'admet pas de chaîne comme argument"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "L'argument FastStringBuffer ne peut pas être null"),
    (ER_TWO_OR_THREE, "2 ou 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Variable accédée avant d'être liée !"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB n'admet pas de chaîne comme argument !"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Erreur ! Affectation de la valeur null à la racine d'un objet walker !!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Ce NodeSetDTM ne peut pas itérer jusqu'à un noeud précédent !"),
    (ER_NODESET_CANNOT_ITERATE, "Ce NodeSet ne peut pas itérer jusqu'à un noeud précédent !"),
    (ER_NODESETDTM_CANNOT_INDEX, "Ce NodeSetDTM ne peut pas effectuer de fonctions d'indexation ou de décompte !"),
    (ER_NODESET_CANNOT_INDEX, "Ce NodeSet ne peut pas effectuer de fonctions d'indexation ou de décompte !"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Impossible d'appeler setShouldCacheNodes après l'appel de nextNode !"),
    (ER_ONLY_ALLOWS, "{0} n''admet que {1} arguments"),
    (ER_UNKNOWN_STEP, "Assertion du programmeur dans getNextStepPos : stepType inconnu : {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Un chemin d'accès relatif était attendu après le jeton '/' ou '//'."),
    (ER_EXPECTED_LOC_PATH, "Un chemin d'accès était attendu, mais la fin de l'expression XPath a été trouvée à la place."),
    (ER_EXPECTED_LOC_STEP, "Une étape d'accès était attendue après le jeton '/' ou '//'."),
    (ER_EXPECTED_NODE_TEST, "Un test de noeud correspondant à NCName:* ou à QName était attendu."),
    (ER_EXPECTED_STEP_PATTERN, "Un motif d'étape était attendu, mais '/' a été détecté."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Un motif de chemin relatif était attendu."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "Le XPathResult de l''expression XPath ''{0}'' a un XPathResultType de {1} qui ne peut pas être converti en booléen."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "Le XPathResult de l''expression XPath ''{0}'' a un XPathResultType de {1} qui ne peut pas être converti en noeud unique. La méthode getSingleNodeValue s''applique uniquement aux types ANY_UNORDERED_NODE_TYPE et FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "La méthode getSnapshotLength ne peut pas être appelée sur le XPathResult de l''expression XPath ''{0}'' car son XPathResultType est {1}. Cette méthode s''applique uniquement aux types UNORDERED_NODE_SNAPSHOT_TYPE et ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "La méthode iterateNext ne peut pas être appelée sur le XPathResult de l''expression XPath ''{0}'' car son XPathResultType est {1}. Cette méthode s''applique uniquement aux types UNORDERED_NODE_ITERATOR_TYPE et ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Le document a été modifié depuis le renvoi du résultat. L'itérateur n'est pas valide."),
    (ER_INVALID_XPATH_TYPE, "Argument de type XPath non valide : {0}"),
    (ER_EMPTY_XPATH_RESULT, "Objet de résultat XPath vide"),
    (ER_INCOMPATIBLE_TYPES, "Le XPathResult de l''expression XPath ''{0}'' a un XPathResultType de {1} qui ne peut pas être forcé dans le XPathResultType spécifié de {2}."),
    (ER_NULL_RESOLVER, "Impossible de résoudre le préfixe avec un résolveur de préfixes null."),
    (ER_CANT_CONVERT_TO_STRING, "Le XPathResult de l''expression XPath ''{0}'' a un XPathResultType de {1} qui ne peut pas être converti en chaîne."),
    (ER_NON_SNAPSHOT_TYPE, "La méthode snapshotItem ne peut pas être appelée sur le XPathResult de l''expression XPath ''{0}'' car son XPathResultType est {1}. Cette méthode s''applique uniquement aux types UNORDERED_NODE_SNAPSHOT_TYPE et ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Le noeud de contexte n'appartient pas au document lié à ce XPathEvaluator."),
    (ER_WRONG_NODETYPE, "Le type de noeud de contexte n'est pas pris en charge."),
    (ER_XPATH_ERROR, "Erreur inconnue dans XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "Le XPathResult de l''expression XPath ''{0}'' a un XPathResultType de {1} qui ne peut pas être converti en nombre"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Fonction d''extension : ''{0}'' ne peut pas être appelée lorsque la fonction XMLConstants.FEATURE_SECURE_PROCESSING a la valeur true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable pour la variable {0} renvoie null"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Type de retour non pris en charge : {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Le type source et/ou le type de retour ne peuvent pas être null"),
    (ER_ARG_CANNOT_BE_NULL, "L''argument {0} ne peut pas être null"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) ne peut pas être appelé avec objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) ne peut pas être appelé avec objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Tentative de définition d''une fonction sans nom : {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Tentative de définition de la fonction inconnue \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Tentative d''obtention d''une fonction sans nom : {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Tentative d''obtention de la fonction inconnue \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Tentative de définition d''un XPathFunctionResolver null :{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Tentative de définition d''un XPathVariableResolver null :{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "le nom de l'environnement local de la fonction format-number n'est pas encore géré !"),
    (WG_PROPERTY_NOT_SUPPORTED, "Propriété XSL non prise en charge : {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Aucune action n''est actuellement effectuée avec l''espace de noms {0} dans la propriété : {1}"),
    (WG_SECURITY_EXCEPTION, "SecurityException lors de l''accès à la propriété système XSL : {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Syntaxe obsolète : quo(...) n'est plus défini dans XPath."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath requiert un objet dérivé pour implémenter nodeTest !"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "jeton de fonction introuvable."),
    (WG_COULDNOT_FIND_FUNCTION, "Fonction introuvable : {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Impossible de créer une URL à partir de : {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Option -E non prise en charge pour l'analyseur DTM"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "La référence de variable indiquée est hors contexte ou sans définition !  Nom = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Codage non pris en charge : {0}"),
    // UI strings
    (UI_LANGUAGE, "fr"),
    (HELP_LANGUAGE, "fr"),
    (LANGUAGE, "fr"),
    (BAD_CODE, "Le paramètre de createMessage se trouve hors limites"),
    (FORMAT_FAILED, "Exception soulevée lors de l'appel de messageFormat"),
    (VERSION, ">>>>>>> Version de Xalan "),
    (VERSION2, "<<<<<<<"),
    (YES, "oui"),
    (LINE, "Ligne #"),
    (COLUMN, "Colonne #"),
    (XSLDONE, "XSLProcessor : terminé"),
    (XPATH_OPTION, "options xpath : "),
    (OPTION_IN, "   [-in URLXMLentrée]"),
    (OPTION_SELECT, "   [-select expression xpath]"),
    (OPTION_MATCH, "   [-match motif de correspondance (pour les diagnostics de correspondance)]"),
    (OPTION_ANY_EXPR, "Ou une expression xpath effectuera un vidage de diagnostic"),
    (NO_PARSER_MSG1, "Echec du processus XSL."),
    (NO_PARSER_MSG2, "** Analyseur introuvable **"),
    (NO_PARSER_MSG3, "Vérifiez le chemin d'accès aux classes."),
    (NO_PARSER_MSG4, "Si vous ne disposez pas de l'analyseur XML d'IBM pour Java, vous pouvez le télécharger sur le site"),
    (NO_PARSER_MSG5, "IBM AlphaWorks : http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Erreur : "),
    (WARNING_HEADER, "Avertissement : "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "MOTIF "),
];
